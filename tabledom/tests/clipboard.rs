use tabledom::{records, Grid, GridConfig, GridError, HeaderDeclaration, SectionKind};

fn populated() -> Grid {
    let mut grid = Grid::create(Default::default());
    grid.set_header(
        HeaderDeclaration::keyed([
            ("A", vec![("key", "A")]),
            ("B", vec![("key", "B")]),
            ("C", vec![("key", "C")]),
        ]),
        false,
    )
    .set_body(
        &records([
            ("r1", vec![("A", "a1"), ("B", "b1"), ("C", "c1")]),
            ("r2", vec![("A", "a2"), ("B", "b2"), ("C", "c2")]),
        ]),
        &[],
    );
    grid
}

// ============================================================================
// Copy / paste
// ============================================================================

#[test]
fn test_copy_then_paste_duplicates_column() {
    let mut grid = populated();
    grid.copy(1).paste(1);

    for row in grid.table().rows() {
        assert_eq!(row.cells.len(), 4);
        let pasted = &row.cells[1];
        let original = &row.cells[2];
        assert!(pasted.same_structure(original));
        assert_ne!(pasted.id, original.id);
    }
    assert_eq!(
        grid.cell(SectionKind::Body, (0, 1)).unwrap().text(),
        Some("b1")
    );
    assert!(grid.diagnostics().is_empty());
}

#[test]
fn test_pasted_column_is_independent() {
    let mut grid = populated();
    grid.copy(1).paste(1);

    grid.cell_mut(SectionKind::Body, (0, 2))
        .unwrap()
        .set_text("edited")
        .set_attr("data-content", "edited");

    let pasted = grid.cell(SectionKind::Body, (0, 1)).unwrap();
    assert_eq!(pasted.text(), Some("b1"));
    assert_eq!(pasted.attr("data-content"), Some("b1"));

    let held = &grid.clipboard().unwrap().body[0];
    assert_eq!(held.as_ref().and_then(|c| c.text()), Some("b1"));
}

#[test]
fn test_paste_before_copy_is_noop() {
    let mut grid = populated();
    let before = grid.table().clone();

    grid.paste(1);

    assert_eq!(grid.table(), &before);
    assert_eq!(grid.diagnostics()[0].reason, GridError::EmptyClipboard);
}

#[test]
fn test_clipboard_can_be_pasted_twice() {
    let mut grid = populated();
    grid.copy(0).paste(3).paste(0);

    let row = &grid.table().body_rows()[1];
    let texts: Vec<_> = row.cells.iter().map(|c| c.text()).collect();
    assert_eq!(
        texts,
        vec![Some("a2"), Some("a2"), Some("b2"), Some("c2"), Some("a2")]
    );

    let mut ids: Vec<_> = row.cells.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_copy_overwrites_previous_snapshot() {
    let mut grid = populated();
    grid.copy(0).copy(2);

    let snapshot = grid.clipboard().unwrap();
    assert_eq!(snapshot.index, 2);
    assert_eq!(snapshot.head.len(), 1);
    assert_eq!(snapshot.body.len(), 2);
    assert_eq!(
        snapshot.body[1].as_ref().and_then(|c| c.text()),
        Some("c2")
    );
}

#[test]
fn test_default_index_comes_from_config() {
    let mut grid = Grid::create_with(Default::default(), GridConfig::new().default_clip_index(2));
    grid.set_header(
        HeaderDeclaration::keyed([
            ("A", vec![("key", "A")]),
            ("B", vec![("key", "B")]),
            ("C", vec![("key", "C")]),
        ]),
        false,
    );
    grid.copy(None);

    assert_eq!(grid.clipboard().map(|c| c.index), Some(2));
    assert_eq!(
        grid.clipboard().unwrap().head[0]
            .as_ref()
            .and_then(|c| c.text()),
        Some("C")
    );
}

#[test]
fn test_copy_missing_index_keeps_rows_aligned() {
    let mut grid = populated();
    grid.copy(7);

    let snapshot = grid.clipboard().unwrap();
    assert!(snapshot.head.iter().chain(&snapshot.body).all(Option::is_none));
    assert_eq!(grid.diagnostics().len(), 3);

    let before = grid.table().clone();
    grid.paste(0);
    assert_eq!(grid.table(), &before);
}
