use tabledom::{
    attributes, records, Content, Grid, GridConfig, GridError, HeaderDeclaration, SectionKind,
    Table,
};

fn keyed_header() -> HeaderDeclaration {
    HeaderDeclaration::keyed([
        ("First", vec![("key", "A"), ("width", "40")]),
        ("Second", vec![("key", "B")]),
    ])
}

fn sample_records() -> tabledom::Records {
    records([
        ("r1", vec![("A", "x"), ("B", "y")]),
        ("r2", vec![("A", "z")]),
    ])
}

// ============================================================================
// Header Registry
// ============================================================================

#[test]
fn test_keyed_header_renders_one_row() {
    let mut grid = Grid::create(attributes([("id", "people"), ("class", "wide")]));
    grid.set_header(keyed_header(), false);

    assert_eq!(grid.table().attrs.get("class").map(String::as_str), Some("wide"));
    assert_eq!(grid.order_keys(), ["A".to_string(), "B".to_string()]);
    assert_eq!(grid.headers(), ["First".to_string(), "Second".to_string()]);

    let head = grid.table().head_rows();
    assert_eq!(head.len(), 1);
    let first = &head[0].cells[0];
    assert_eq!(first.text(), Some("First"));
    assert_eq!(first.attr("title"), Some("First"));
    assert_eq!(first.attr("key"), Some("A"));
    assert_eq!(first.attr("width"), Some("40"));
    assert_eq!(first.key(), Some("A"));
    assert_eq!(head[0].cells[1].key(), Some("B"));
}

#[test]
fn test_hidden_header_records_keys_only() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(keyed_header(), true);

    assert_eq!(grid.order_keys(), ["A".to_string(), "B".to_string()]);
    assert!(grid.table().head_rows().is_empty());
}

#[test]
fn test_plain_names_have_no_keys() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(HeaderDeclaration::from("name,sname,table"), false);

    assert!(grid.order_keys().is_empty());
    let row = &grid.table().head_rows()[0];
    assert_eq!(row.cells.len(), 3);
    assert_eq!(row.cells[2].text(), Some("table"));
    assert_eq!(row.cells[2].attr("title"), Some("table"));
    assert_eq!(row.cells[2].key(), None);

    // Nothing to order by: rows are created but stay empty.
    grid.set_body(&sample_records(), &[]);
    assert_eq!(grid.table().body_rows().len(), 2);
    assert!(grid.table().body_rows()[0].cells.is_empty());
    assert!(grid.backup_index().is_empty());
}

#[test]
fn test_ordered_names() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(HeaderDeclaration::ordered(["one", "two"]), false);

    let texts: Vec<_> = grid.table().head_rows()[0]
        .cells
        .iter()
        .map(|c| c.text())
        .collect();
    assert_eq!(texts, vec![Some("one"), Some("two")]);
}

#[test]
fn test_missing_declaration_is_noop() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(None, false);

    assert!(grid.table().head.is_none());
    assert!(grid.order_keys().is_empty());
    assert!(grid.diagnostics().is_empty());
}

#[test]
fn test_duplicate_key_is_rejected_at_declaration() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(
        HeaderDeclaration::keyed([
            ("First", vec![("key", "A")]),
            ("Again", vec![("key", "A")]),
        ]),
        false,
    );

    assert_eq!(grid.order_keys(), ["A".to_string()]);
    assert_eq!(
        grid.diagnostics()[0].reason,
        GridError::DuplicateKey("A".to_string())
    );

    // The second header cell is still shown, but carries no data-key.
    let head = &grid.table().head_rows()[0];
    assert_eq!(head.cells.len(), 2);
    assert_eq!(head.cells[1].key(), None);

    grid.set_body(&records([("r1", vec![("A", "x")])]), &[]);
    assert_eq!(grid.table().body_rows()[0].cells.len(), 1);
}

#[test]
fn test_binding_mode_ignores_setup() {
    let mut grid = Grid::bind(Table::default());
    grid.set_header(keyed_header(), false)
        .set_body(&sample_records(), &[]);

    assert!(grid.table().head.is_none());
    assert!(grid.table().body.is_none());
    assert_eq!(
        grid.diagnostics()[0].reason,
        GridError::BindingMode("set_header")
    );
    assert_eq!(
        grid.diagnostics()[1].reason,
        GridError::BindingMode("set_body")
    );
}

// ============================================================================
// Body Populator
// ============================================================================

#[test]
fn test_population_follows_record_then_key_order() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(keyed_header(), false)
        .set_body(&sample_records(), &[]);

    let rows = grid.table().body_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key(), Some("r1"));
    assert_eq!(rows[1].key(), Some("r2"));

    for row in rows {
        let keys: Vec<_> = row.cells.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec![Some("A"), Some("B")]);
    }

    assert_eq!(rows[0].cells[0].text(), Some("x"));
    assert_eq!(rows[0].cells[0].attr("data-content"), Some("x"));
    assert_eq!(rows[0].cells[1].text(), Some("y"));
    assert_eq!(rows[1].cells[0].text(), Some("z"));

    let absent = &rows[1].cells[1];
    assert_eq!(absent.content, Content::None);
    assert_eq!(absent.attr("data-content"), Some("!"));
}

#[test]
fn test_empty_value_gets_marker() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(keyed_header(), false)
        .set_body(&records([("r1", vec![("A", ""), ("B", "y")])]), &[]);

    let cell = grid.cell(SectionKind::Body, (0, 0)).unwrap();
    assert_eq!(cell.text(), Some(""));
    assert_eq!(cell.attr("data-content"), Some("!"));
}

#[test]
fn test_extra_attribute_keys_on_rows() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(keyed_header(), false)
        .set_body(
            &records([
                ("r1", vec![("A", "x"), ("email", "x@example.com")]),
                ("r2", vec![("A", "z")]),
            ]),
            &["email"],
        );

    let rows = grid.table().body_rows();
    assert_eq!(rows[0].attr("data-email"), Some("x@example.com"));
    assert_eq!(rows[1].attr("data-email"), Some("not found"));
}

#[test]
fn test_markers_come_from_config() {
    let config = GridConfig::new()
        .empty_marker("-")
        .missing_attribute_marker("n/a");
    let mut grid = Grid::create_with(Default::default(), config);
    grid.set_header(keyed_header(), false)
        .set_body(&records([("r1", vec![("A", "x")])]), &["email"]);

    let row = &grid.table().body_rows()[0];
    assert_eq!(row.attr("data-email"), Some("n/a"));
    assert_eq!(row.cells[1].attr("data-content"), Some("-"));
}

#[test]
fn test_backup_index_has_one_entry_per_row_and_key() {
    let mut grid = Grid::create(Default::default());
    grid.set_header(keyed_header(), false)
        .set_body(&sample_records(), &[]);

    let keys: Vec<_> = grid
        .backup_index()
        .entries()
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(keys, vec!["A", "B", "A", "B"]);
}
