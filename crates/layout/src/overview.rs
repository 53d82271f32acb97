//! Miniature whole-grid overview with atlas cross-references.
//!
//! When the chart is tiled, each plan region is outlined on the
//! miniature and labeled with its 1-based page number. The plan passed
//! in must be the one the chart passes render from; the labels are the
//! reader's map from overview boxes to chart pages.

use crate::elements::{RectElement, Stroke, TextStyle};
use crate::plan::TilePlan;
use crate::surface::Surface;
use yarnpress_chart::{Grid, Palette};
use yarnpress_types::{Rect, Size};

/// Smallest scaled region box that still gets a page-number label.
const MIN_LABEL_WIDTH: f32 = 14.0;
const MIN_LABEL_HEIGHT: f32 = 10.0;

/// Draw the miniature at `(x, y)`, scaled uniformly to fit `avail`.
/// Returns the height consumed.
pub fn render_overview(
    surface: &mut dyn Surface,
    grid: &Grid,
    palette: &Palette,
    plan: &TilePlan,
    x: f32,
    y: f32,
    avail: Size,
) -> f32 {
    let scale = (avail.width / grid.width() as f32).min(avail.height / grid.height() as f32);
    let width = grid.width() as f32 * scale;
    let height = grid.height() as f32 * scale;

    // Painted cells only; blanks stay paper-colored.
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let Some(id) = grid.cell(row, col).color.as_ref() else {
                continue;
            };
            let Some(entry) = palette.get(id) else {
                continue;
            };
            surface.draw_rect(
                Rect::new(x + col as f32 * scale, y + row as f32 * scale, scale, scale),
                RectElement {
                    fill: Some(entry.color),
                    stroke: None,
                },
            );
        }
    }

    surface.draw_rect(
        Rect::new(x, y, width, height),
        RectElement {
            fill: None,
            stroke: Some(Stroke::hairline()),
        },
    );

    if plan.multi_page {
        for region in &plan.regions {
            let bounds = Rect::new(
                x + region.start_col as f32 * scale,
                y + region.start_row as f32 * scale,
                region.cols() as f32 * scale,
                region.rows() as f32 * scale,
            );
            surface.draw_rect(
                bounds,
                RectElement {
                    fill: None,
                    stroke: Some(Stroke::outline()),
                },
            );

            if bounds.width >= MIN_LABEL_WIDTH && bounds.height >= MIN_LABEL_HEIGHT {
                let label_style =
                    TextStyle::heading((bounds.height * 0.5).clamp(6.0, 12.0)).centered();
                let label_y = bounds.y + (bounds.height - label_style.line_height()) / 2.0;
                surface.draw_text(
                    Rect::new(bounds.x, label_y, bounds.width, label_style.line_height()),
                    &(region.page_index + 1).to_string(),
                    label_style,
                );
            }
        }
    }

    height
}
