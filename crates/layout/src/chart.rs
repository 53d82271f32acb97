//! Per-tile chart rendering: cell fills, cell symbols and ruler labels
//! for one region of the tile plan.

use crate::config::LayoutConfig;
use crate::elements::{RectElement, Stroke, TextStyle};
use crate::numbering::{row_direction, run_length_labels};
use crate::options::{ChartMode, ChartVisual, SymbolMode};
use crate::plan::{TilePlan, TileRegion};
use crate::surface::Surface;
use std::collections::HashSet;
use yarnpress_chart::{Grid, Palette, StitchLookup};
use yarnpress_types::{Color, Rect, color};

/// Everything one chart pass needs, mode and flags included. One value
/// is built per pass and reused for each of its tiles.
pub struct ChartPass<'a> {
    pub grid: &'a Grid,
    pub palette: &'a Palette,
    pub stitches: &'a dyn StitchLookup,
    pub mode: ChartMode,
    pub visual: ChartVisual,
    pub left_handed: bool,
}

impl<'a> ChartPass<'a> {
    fn cell_fill(&self, row: usize, col: usize, warned: &mut HashSet<String>) -> Option<Color> {
        if self.mode == ChartMode::Stitch {
            // Stitch charts are visually locked to a neutral background.
            return None;
        }
        if !self.visual.show_cell_backgrounds {
            return None;
        }
        let id = self.grid.cell(row, col).color.as_ref()?;
        match self.palette.get(id) {
            Some(entry) => Some(entry.color),
            None => {
                if warned.insert(id.to_string()) {
                    log::warn!("palette entry '{}' not found, cell renders blank", id);
                }
                None
            }
        }
    }

    fn stitch_symbol(&self, row: usize, col: usize, warned: &mut HashSet<String>) -> Option<String> {
        let id = self.grid.cell(row, col).stitch.as_ref()?;
        match self.stitches.stitch(id) {
            Some(def) => Some(def.symbol.clone()),
            None => {
                if warned.insert(id.to_string()) {
                    log::warn!("stitch '{}' not found, cell symbol omitted", id);
                }
                None
            }
        }
    }
}

/// Render one tile region at `(x, y)` on the current page: column
/// ruler, per-row side rulers, then the cells. Returns the height
/// consumed.
#[allow(clippy::too_many_arguments)]
pub fn render_tile(
    surface: &mut dyn Surface,
    pass: &ChartPass,
    plan: &TilePlan,
    region: &TileRegion,
    x: f32,
    y: f32,
    title: &str,
    config: &LayoutConfig,
) -> f32 {
    let cell = plan.cell_size;
    let title_style = TextStyle::heading(12.0);
    let grid_x = x + config.ruler_gutter;
    let grid_y = y + title_style.line_height() + config.ruler_gutter;
    let grid_width = region.cols() as f32 * cell;

    surface.draw_text(
        Rect::new(x, y, config.chart_area().width, title_style.line_height()),
        title,
        title_style,
    );

    let ruler_style = TextStyle::body((cell * 0.5).clamp(4.0, 8.0)).centered();

    // Column numbers along the top: every cell when tiled, every 5th
    // otherwise.
    for col in region.start_col..region.end_col {
        let number = col + 1;
        if !plan.multi_page && number % 5 != 0 {
            continue;
        }
        let cx = grid_x + (col - region.start_col) as f32 * cell;
        surface.draw_text(
            Rect::new(cx, grid_y - ruler_style.line_height(), cell, ruler_style.line_height()),
            &number.to_string(),
            ruler_style,
        );
    }

    let mut warned_colors = HashSet::new();
    let mut warned_stitches = HashSet::new();

    for row in region.start_row..region.end_row {
        let ry = grid_y + (row - region.start_row) as f32 * cell;
        let direction = row_direction(row, pass.left_handed);

        // The row number sits on the side the row is read from, so it
        // alternates per row rather than staying fixed for the chart.
        let number = (row + 1).to_string();
        let label_y = ry + (cell - ruler_style.line_height()) / 2.0;
        if direction.reversed {
            surface.draw_text(
                Rect::new(grid_x + grid_width + 2.0, label_y, config.ruler_gutter - 2.0, ruler_style.line_height()),
                &number,
                ruler_style,
            );
        } else {
            surface.draw_text(
                Rect::new(x, label_y, config.ruler_gutter - 2.0, ruler_style.line_height()),
                &number,
                ruler_style.right_aligned(),
            );
        }

        let run_labels = match (pass.mode, pass.visual.symbol_mode) {
            (ChartMode::Color, SymbolMode::ColorIndex) if pass.visual.show_cell_symbols => {
                Some(run_length_labels(pass.grid.row(row), row, pass.left_handed))
            }
            _ => None,
        };

        for col in region.start_col..region.end_col {
            let cx = grid_x + (col - region.start_col) as f32 * cell;
            let fill = pass.cell_fill(row, col, &mut warned_colors);
            surface.draw_rect(
                Rect::new(cx, ry, cell, cell),
                RectElement {
                    fill,
                    stroke: Some(Stroke::hairline()),
                },
            );

            let symbol = match pass.mode {
                ChartMode::Color => {
                    if !pass.visual.show_cell_symbols {
                        None
                    } else {
                        match pass.visual.symbol_mode {
                            SymbolMode::ColorIndex => run_labels
                                .as_ref()
                                .map(|labels| labels[col].clone())
                                .filter(|label| !label.is_empty()),
                            SymbolMode::StitchSymbol => {
                                pass.stitch_symbol(row, col, &mut warned_stitches)
                            }
                        }
                    }
                }
                ChartMode::Stitch | ChartMode::Hybrid => {
                    pass.stitch_symbol(row, col, &mut warned_stitches)
                }
            };

            if let Some(symbol) = symbol {
                let text_color = match pass.mode {
                    ChartMode::Stitch => color::BLACK,
                    _ => fill.map(|f| f.contrast_text()).unwrap_or(color::BLACK),
                };
                let symbol_style = TextStyle::body((cell * 0.55).clamp(4.0, 10.0))
                    .colored(text_color)
                    .centered();
                let sy = ry + (cell - symbol_style.line_height()) / 2.0;
                surface.draw_text(
                    Rect::new(cx, sy, cell, symbol_style.line_height()),
                    &symbol,
                    symbol_style,
                );
            }
        }
    }

    title_style.line_height() + config.ruler_gutter + region.rows() as f32 * cell
}
