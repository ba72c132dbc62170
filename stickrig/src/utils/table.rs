//! Table formatting utilities

use super::format::{format_angle, format_point};
use prettytable::{Cell, Row, Table};
use stickrig_core::SkeletonExport;

/// Create a table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).style_spec("b"))
        .collect();
    table.set_titles(Row::new(header_cells));

    table
}

/// Add a row to a table
pub fn add_table_row(table: &mut Table, cells: Vec<String>) {
    let row_cells: Vec<Cell> = cells.into_iter().map(|s| Cell::new(&s)).collect();
    table.add_row(Row::new(row_cells));
}

/// One row per bone with its local angles and world transform
pub fn bones_table(skeleton: &SkeletonExport) -> Table {
    let mut table = create_table(&["ID", "Name", "Parent", "Length", "Angle", "World", "Tip"]);

    for bone in &skeleton.bones {
        add_table_row(
            &mut table,
            vec![
                bone.id.to_string(),
                bone.name.clone(),
                bone.parent_id.map_or_else(|| "-".to_string(), |p| p.to_string()),
                format!("{:.4}", bone.length),
                format_angle(bone.rest_angle + bone.current_angle),
                format!(
                    "{} @ {}",
                    format_point((bone.world_x, bone.world_y)),
                    format_angle(bone.world_angle)
                ),
                format_point(bone.tip),
            ],
        );
    }

    table
}
