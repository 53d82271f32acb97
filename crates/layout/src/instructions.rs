//! Written row instructions, generated from the same direction
//! resolver the chart rulers use so the two can never disagree.

use crate::numbering::row_direction;
use yarnpress_chart::{Grid, Palette};
use yarnpress_types::ColorId;

#[derive(Debug, Clone, PartialEq)]
pub struct RowInstruction {
    pub row_number: usize,
    pub reversed: bool,
    /// Comma-separated color runs in working order.
    pub text: String,
}

impl RowInstruction {
    pub fn direction_label(&self) -> &'static str {
        if self.reversed { "right to left" } else { "left to right" }
    }
}

fn describe_run(color: Option<&ColorId>, count: usize, palette: &Palette) -> String {
    match color {
        None => format!("{} open", count),
        Some(id) => {
            let name = palette
                .get(id)
                .map(|entry| entry.name.as_str())
                .unwrap_or_else(|| id.as_str());
            format!("{} {}", count, name)
        }
    }
}

/// One instruction per grid row, colors grouped into runs along the
/// row's resolved working direction.
pub fn written_row_instructions(
    grid: &Grid,
    palette: &Palette,
    left_handed: bool,
) -> Vec<RowInstruction> {
    (0..grid.height())
        .map(|row_index| {
            let direction = row_direction(row_index, left_handed);
            let row = grid.row(row_index);

            let mut order: Vec<usize> = (0..row.len()).collect();
            if direction.reversed {
                order.reverse();
            }

            let mut parts = Vec::new();
            let mut run_color: Option<Option<&ColorId>> = None;
            let mut run_len = 0;
            for col in order {
                let color = row[col].color.as_ref();
                if run_color == Some(color) {
                    run_len += 1;
                } else {
                    if let Some(previous) = run_color {
                        parts.push(describe_run(previous, run_len, palette));
                    }
                    run_color = Some(color);
                    run_len = 1;
                }
            }
            if let Some(previous) = run_color {
                parts.push(describe_run(previous, run_len, palette));
            }

            RowInstruction {
                row_number: row_index + 1,
                reversed: direction.reversed,
                text: parts.join(", "),
            }
        })
        .collect()
}
