use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::prelude::*;

fn main() -> std::io::Result<()> {
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(HostNode::new("body").child(HostNode::new("div").id("app")));
    let mut grid = Grid::create_with(attributes([("id", "users")]), GridConfig::new().debug(true));

    grid.done(|grid| {
        for row in grid.table().rows() {
            let line: Vec<_> = row
                .cells
                .iter()
                .map(|c| c.text().unwrap_or("-").to_string())
                .collect();
            println!("{}", line.join(" | "));
        }
    });

    grid.set_header(
        HeaderDeclaration::keyed([
            ("Name", vec![("key", "name"), ("width", "30")]),
            ("Email", vec![("key", "email")]),
            ("Role", vec![("key", "role")]),
        ]),
        false,
    )
    .set_body(
        &records([
            ("u1", vec![("name", "Ada"), ("email", "ada@example.com"), ("role", "admin")]),
            ("u2", vec![("name", "Grace"), ("email", "grace@example.com")]),
        ]),
        &["role"],
    )
    .on("role", |cell, _| {
        if cell.content.is_none() {
            cell.set_text("guest");
        }
    })
    .copy(0)
    .paste(3)
    .insert_into(SectionKind::Body)
    .set_row_with(2, |cell| {
        cell.set_text("?");
    })
    .remove(RemoveTarget::Cell)
    .at(&[9, 9]);

    grid.append_to(Target::Locator {
        scope: &mut doc,
        locator: "#app",
    });

    for skipped in grid.diagnostics() {
        println!("skipped {}: {}", skipped.operation, skipped.reason);
    }

    Ok(())
}
