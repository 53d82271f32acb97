//! Legend sections: yarn requirements (plain or stitch-aware) and the
//! stitch guide.

use crate::config::LayoutConfig;
use crate::elements::{RectElement, Stroke, TextStyle};
use crate::flow::{ExportJob, PageCursor};
use crate::surface::Surface;
use itertools::Itertools;
use std::collections::HashMap;
use yarnpress_chart::PaletteEntry;
use yarnpress_types::{ColorId, Rect};

pub const DEFAULT_SKEIN_LENGTH: f32 = 295.0;

const ROW_HEIGHT: f32 = 16.0;
const HEADING_SIZE: f32 = 13.0;

/// Yards needed for `stitch_count` stitches at `yarn_per_stitch`
/// inches each, rounded up to whole yards.
pub fn yards_required(stitch_count: usize, yarn_per_stitch: f32) -> u32 {
    ((stitch_count as f32 * yarn_per_stitch) / 36.0).ceil() as u32
}

/// Skeins needed to cover `yards`, rounded up.
pub fn skeins_required(yards: u32, skein_length: Option<f32>) -> u32 {
    (yards as f32 / skein_length.unwrap_or(DEFAULT_SKEIN_LENGTH)).ceil() as u32
}

fn heading(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    text: &str,
    config: &LayoutConfig,
) -> PageCursor {
    let style = TextStyle::heading(HEADING_SIZE);
    surface.draw_text(
        Rect::new(
            config.margin,
            config.margin + cursor.y,
            config.content_size().width,
            style.line_height(),
        ),
        text,
        style,
    );
    cursor.advanced(style.line_height() + 4.0)
}

fn break_if_full(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    needed: f32,
    config: &LayoutConfig,
) -> PageCursor {
    if cursor.has_content && cursor.remaining(config.content_size().height) < needed {
        surface.begin_page();
        PageCursor::top()
    } else {
        cursor
    }
}

/// Yarn rows with nonzero usage, heaviest first. Ties break on name so
/// the ordering is total.
fn usage_rows<'a>(
    job: &'a ExportJob,
    usage: &HashMap<ColorId, usize>,
) -> Vec<(&'a PaletteEntry, usize)> {
    usage
        .iter()
        .filter_map(|(id, &count)| {
            let entry = job.palette.get(id);
            if entry.is_none() {
                log::warn!("palette entry '{}' missing from palette, left out of legend", id);
            }
            entry.map(|e| (e, count))
        })
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.name.cmp(&b.0.name)))
        .collect()
}

/// Materials section. Picks the plain yarn table or the stitch-aware
/// variant (color swatch as the key, stitch key appended) based on the
/// normalized options.
pub fn render_materials(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    job: &ExportJob,
    usage: &HashMap<ColorId, usize>,
    config: &LayoutConfig,
) -> PageCursor {
    let stitch_aware = job.options.stitch_aware();
    let mut cursor = heading(surface, cursor, "Yarn Requirements", config);

    let body = TextStyle::body(9.0);
    let x = config.margin;
    for (entry, count) in usage_rows(job, usage) {
        cursor = break_if_full(surface, cursor, ROW_HEIGHT, config);
        let y = config.margin + cursor.y;

        let mut col_x = x;
        if !stitch_aware {
            // Plain legend keys rows by the chart's index token.
            if let Some(token) = job.palette.symbol_token(&entry.id) {
                surface.draw_text(
                    Rect::new(col_x, y + 2.0, 20.0, body.line_height()),
                    &token,
                    TextStyle::heading(9.0),
                );
            }
            col_x += 26.0;
        }

        surface.draw_rect(
            Rect::new(col_x, y + 2.0, 14.0, 10.0),
            RectElement {
                fill: Some(entry.color),
                stroke: Some(Stroke::hairline()),
            },
        );
        col_x += 20.0;

        let name = match &entry.brand {
            Some(brand) => format!("{} ({})", entry.name, brand),
            None => entry.name.clone(),
        };
        surface.draw_text(Rect::new(col_x, y + 2.0, 240.0, body.line_height()), &name, body);

        let yards = yards_required(count, job.settings.yarn_per_stitch);
        let skeins = skeins_required(yards, entry.skein_length);
        surface.draw_text(
            Rect::new(x + 320.0, y + 2.0, 90.0, body.line_height()),
            &format!("{} stitches", count),
            body,
        );
        surface.draw_text(
            Rect::new(x + 410.0, y + 2.0, 60.0, body.line_height()),
            &format!("{} yd", yards),
            body.right_aligned(),
        );
        surface.draw_text(
            Rect::new(x + 478.0, y + 2.0, 62.0, body.line_height()),
            &format!("{} skein{}", skeins, if skeins == 1 { "" } else { "s" }),
            body.right_aligned(),
        );

        cursor = cursor.advanced(ROW_HEIGHT);
    }

    if stitch_aware {
        let used = job.grid.used_stitches();
        if !used.is_empty() {
            cursor = break_if_full(
                surface,
                cursor.advanced(config.section_gap / 2.0),
                HEADING_SIZE * 1.4 + ROW_HEIGHT,
                config,
            );
            cursor = heading(surface, cursor, "Stitch Key", config);
            for id in used {
                let Some(def) = job.stitches.stitch(&id) else {
                    log::warn!("stitch '{}' missing from lookup, left out of stitch key", id);
                    continue;
                };
                cursor = break_if_full(surface, cursor, ROW_HEIGHT, config);
                let y = config.margin + cursor.y;
                surface.draw_text(
                    Rect::new(x, y + 2.0, 20.0, body.line_height()),
                    &def.symbol,
                    TextStyle::heading(9.0).centered(),
                );
                surface.draw_text(
                    Rect::new(x + 26.0, y + 2.0, 240.0, body.line_height()),
                    &format!("{} ({})", def.name, def.abbreviation),
                    body,
                );
                cursor = cursor.advanced(ROW_HEIGHT);
            }
        }
    }

    cursor
}

/// Final stitch guide: every stitch the grid actually uses, with
/// symbol, name and abbreviation.
pub fn render_stitch_legend(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    job: &ExportJob,
    config: &LayoutConfig,
) -> PageCursor {
    let mut cursor = heading(surface, cursor, "Stitch Guide", config);
    let body = TextStyle::body(10.0);
    let x = config.margin;

    for id in job.grid.used_stitches() {
        let Some(def) = job.stitches.stitch(&id) else {
            log::warn!("stitch '{}' missing from lookup, left out of stitch guide", id);
            continue;
        };
        cursor = break_if_full(surface, cursor, ROW_HEIGHT, config);
        let y = config.margin + cursor.y;
        surface.draw_text(
            Rect::new(x, y + 2.0, 24.0, body.line_height()),
            &def.symbol,
            TextStyle::heading(10.0).centered(),
        );
        surface.draw_text(
            Rect::new(x + 32.0, y + 2.0, 260.0, body.line_height()),
            &def.name,
            body,
        );
        surface.draw_text(
            Rect::new(x + 300.0, y + 2.0, 80.0, body.line_height()),
            &def.abbreviation,
            body,
        );
        cursor = cursor.advanced(ROW_HEIGHT);
    }

    cursor
}
