//! Plain-text table rendering for result records.

use crate::store::SimulationRecord;

const COLUMNS: [&str; 6] = [
    "board_size",
    "pool_size",
    "num_boards",
    "winning_size",
    "winners",
    "timestamp",
];

/// Renders records as an aligned text table, one row per record.
pub fn render_table(records: &[SimulationRecord]) -> String {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.board_size.to_string(),
                r.number_pool_size.to_string(),
                r.num_boards.to_string(),
                r.winning_number_size.to_string(),
                r.winning_boards_count.to_string(),
                r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for (i, (header, &width)) in COLUMNS.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:>width$}", header, width = width));
    }
    out.push('\n');

    for row in &rows {
        for (i, (cell, &width)) in row.iter().zip(widths.iter()).enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:>width$}", cell, width = width));
        }
        out.push('\n');
    }

    out
}
