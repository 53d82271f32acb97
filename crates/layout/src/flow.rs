//! Document flow sequencer.
//!
//! Sections render in one fixed order; options control only presence
//! and page-break forcing, never reordering. The tile plan is computed
//! exactly once here and the same value is threaded into the overview
//! and every chart pass, which is what keeps overview page labels and
//! physical chart pages in agreement.

use crate::LayoutError;
use crate::chart::{self, ChartPass};
use crate::config::LayoutConfig;
use crate::elements::TextStyle;
use crate::legend;
use crate::instructions::written_row_instructions;
use crate::options::{ChartMode, OverviewMode, ResolvedOptions};
use crate::overview;
use crate::plan::{PageBudget, TilePlan, plan_tiles};
use crate::surface::Surface;
use yarnpress_chart::{Grid, Palette, ProjectSettings, StitchLookup};
use yarnpress_types::{Color, Rect, Size};

/// Vertical space reserved on every chart page for the pass title.
const CHART_TITLE_BLOCK: f32 = 24.0;

/// One export's worth of inputs, borrowed from the caller. Options are
/// already normalized.
pub struct ExportJob<'a> {
    pub grid: &'a Grid,
    pub palette: &'a Palette,
    pub stitches: &'a dyn StitchLookup,
    pub settings: &'a ProjectSettings,
    pub options: ResolvedOptions,
}

/// Vertical position on the current page plus whether anything has
/// been placed since the last page break. Threaded through every
/// section step; this is the whole of the sequencer's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// Offset from the top of the content box.
    pub y: f32,
    pub has_content: bool,
}

impl PageCursor {
    pub fn top() -> Self {
        Self {
            y: 0.0,
            has_content: false,
        }
    }

    pub fn advanced(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            has_content: true,
        }
    }

    pub fn remaining(&self, content_height: f32) -> f32 {
        (content_height - self.y).max(0.0)
    }
}

fn chart_budget(config: &LayoutConfig) -> PageBudget {
    let area = config.chart_area();
    PageBudget::full_page(area.width, area.height - CHART_TITLE_BLOCK)
}

/// Lay out the whole document onto `surface`.
///
/// Planning errors surface here, before anything is drawn; a failed
/// compose never leaves a partial document behind.
pub fn compose(
    job: &ExportJob,
    config: &LayoutConfig,
    surface: &mut dyn Surface,
) -> Result<(), LayoutError> {
    let options = &job.options;
    let usage = job.grid.usage_counts();
    let content = config.content_size();

    let plan = plan_tiles(
        job.grid.width(),
        job.grid.height(),
        chart_budget(config),
        config.min_single_page_cell,
        config.min_atlas_cell,
    )?;
    if plan.regions.is_empty() {
        return Err(LayoutError::DegeneratePage(format!(
            "page holds no cell columns of a {}x{} chart",
            job.grid.width(),
            job.grid.height()
        )));
    }

    surface.begin_page();
    let mut cursor = PageCursor::top();
    let mut after_cover = false;

    if options.include_cover_page {
        render_cover(surface, job, config);
        surface.begin_page();
        after_cover = true;
    } else if options.include_header {
        cursor = render_header(surface, cursor, job, config);
    }

    let include_overview = match options.overview {
        OverviewMode::Always => true,
        OverviewMode::Never => false,
        OverviewMode::Auto => plan.multi_page,
    };
    if include_overview {
        if after_cover {
            if cursor.has_content {
                surface.begin_page();
                cursor = PageCursor::top();
            }
        } else if cursor.remaining(content.height) < config.overview_min_space {
            surface.begin_page();
            cursor = PageCursor::top();
        }
        cursor = render_overview_section(surface, cursor, job, &plan, config);
    }

    if options.include_materials {
        if cursor.has_content && cursor.remaining(content.height) < config.materials_min_space {
            surface.begin_page();
            cursor = PageCursor::top();
        } else if cursor.has_content {
            cursor = cursor.advanced(config.section_gap);
        }
        cursor = legend::render_materials(surface, cursor, job, &usage, config);
    }

    // Chart passes always own fresh pages.
    for mode in &options.chart_modes {
        if cursor.has_content {
            surface.begin_page();
        }
        cursor = render_chart_pass(surface, job, *mode, &plan, config);
    }

    if options.stitch_aware() && job.grid.has_stitches() {
        if cursor.has_content {
            surface.begin_page();
            cursor = PageCursor::top();
        }
        cursor = legend::render_stitch_legend(surface, cursor, job, config);
    }

    if options.include_written_instructions {
        if cursor.has_content {
            surface.begin_page();
            cursor = PageCursor::top();
        }
        render_instructions(surface, cursor, job, config);
    }

    log::debug!("composed {} pages", surface.page_count());
    Ok(())
}

fn render_cover(surface: &mut dyn Surface, job: &ExportJob, config: &LayoutConfig) {
    let content = config.content_size();
    let x = config.margin;
    let mut y = config.margin + content.height * 0.3;

    let title_style = TextStyle::heading(26.0).centered();
    surface.draw_text(
        Rect::new(x, y, content.width, title_style.line_height()),
        &job.options.title,
        title_style,
    );
    y += title_style.line_height() + 8.0;

    let subtitle = TextStyle::body(11.0).colored(Color::gray(90)).centered();
    surface.draw_text(
        Rect::new(x, y, content.width, subtitle.line_height()),
        &format!(
            "{} x {} stitches, {} colors",
            job.grid.width(),
            job.grid.height(),
            job.grid.usage_counts().len()
        ),
        subtitle,
    );
    y += subtitle.line_height() + 24.0;

    let branding = &job.options.branding;
    let line = TextStyle::body(10.0).centered();
    if let Some(designer) = &branding.designer {
        surface.draw_text(
            Rect::new(x, y, content.width, line.line_height()),
            &format!("Designed by {}", designer),
            line,
        );
        y += line.line_height();
    }
    if let Some(website) = &branding.website {
        surface.draw_text(
            Rect::new(x, y, content.width, line.line_height()),
            website,
            line,
        );
        y += line.line_height();
    }
    if let Some(copyright) = &branding.copyright {
        let footer = TextStyle::body(8.0).colored(Color::gray(120)).centered();
        surface.draw_text(
            Rect::new(
                x,
                config.margin + content.height - footer.line_height(),
                content.width,
                footer.line_height(),
            ),
            copyright,
            footer,
        );
    }
}

/// Inline project header used when there is no cover page.
fn render_header(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    job: &ExportJob,
    config: &LayoutConfig,
) -> PageCursor {
    let content = config.content_size();
    let x = config.margin;
    let title_style = TextStyle::heading(16.0);
    surface.draw_text(
        Rect::new(x, config.margin + cursor.y, content.width, title_style.line_height()),
        &job.options.title,
        title_style,
    );
    let mut cursor = cursor.advanced(title_style.line_height());

    if let Some(designer) = &job.options.branding.designer {
        let line = TextStyle::body(9.0).colored(Color::gray(90));
        surface.draw_text(
            Rect::new(x, config.margin + cursor.y, content.width, line.line_height()),
            &format!("Designed by {}", designer),
            line,
        );
        cursor = cursor.advanced(line.line_height());
    }

    cursor.advanced(config.section_gap)
}

fn render_overview_section(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    job: &ExportJob,
    plan: &TilePlan,
    config: &LayoutConfig,
) -> PageCursor {
    let content = config.content_size();
    let heading = TextStyle::heading(13.0);
    surface.draw_text(
        Rect::new(config.margin, config.margin + cursor.y, content.width, heading.line_height()),
        "Overview",
        heading,
    );
    let cursor = cursor.advanced(heading.line_height() + 4.0);

    let avail_height = cursor
        .remaining(content.height)
        .min(config.overview_max_height);
    let used = overview::render_overview(
        surface,
        job.grid,
        job.palette,
        plan,
        config.margin,
        config.margin + cursor.y,
        Size::new(content.width, avail_height),
    );
    cursor.advanced(used)
}

fn mode_label(mode: ChartMode) -> &'static str {
    match mode {
        ChartMode::Color => "Color Chart",
        ChartMode::Stitch => "Stitch Chart",
        ChartMode::Hybrid => "Color and Stitch Chart",
    }
}

/// One full rendering pass of the grid in one mode. Starts at the top
/// of the current (fresh) page; emits a page break whenever the next
/// region's planned page index advances.
fn render_chart_pass(
    surface: &mut dyn Surface,
    job: &ExportJob,
    mode: ChartMode,
    plan: &TilePlan,
    config: &LayoutConfig,
) -> PageCursor {
    let pass = ChartPass {
        grid: job.grid,
        palette: job.palette,
        stitches: job.stitches,
        mode,
        visual: job.options.visual,
        left_handed: job.settings.left_handed,
    };

    let mut cursor = PageCursor::top();
    let mut last_page_index = None;
    for region in &plan.regions {
        if let Some(previous) = last_page_index {
            if region.page_index > previous {
                surface.begin_page();
                cursor = PageCursor::top();
            }
        }

        let title = if plan.multi_page {
            format!(
                "{} (part {} of {})",
                mode_label(mode),
                region.page_index + 1,
                plan.regions.len()
            )
        } else {
            mode_label(mode).to_string()
        };

        let used = chart::render_tile(
            surface,
            &pass,
            plan,
            region,
            config.margin,
            config.margin + cursor.y,
            &title,
            config,
        );
        cursor = cursor.advanced(used);
        last_page_index = Some(region.page_index);
    }
    cursor
}

fn render_instructions(
    surface: &mut dyn Surface,
    cursor: PageCursor,
    job: &ExportJob,
    config: &LayoutConfig,
) -> PageCursor {
    let content = config.content_size();
    let heading = TextStyle::heading(13.0);
    surface.draw_text(
        Rect::new(config.margin, config.margin + cursor.y, content.width, heading.line_height()),
        "Written Instructions",
        heading,
    );
    let mut cursor = cursor.advanced(heading.line_height() + 4.0);

    let body = TextStyle::body(9.0);
    // Rough character budget for wrapping run lists onto continuation
    // lines; Helvetica averages about half the font size per glyph.
    let line_chars = (content.width / (body.font_size * 0.5)) as usize;

    for instruction in written_row_instructions(job.grid, job.palette, job.settings.left_handed) {
        let lead = format!(
            "Row {} ({}): ",
            instruction.row_number,
            instruction.direction_label()
        );

        let mut lines = Vec::new();
        let mut current = lead;
        let mut line_is_empty = true;
        for part in instruction.text.split(", ") {
            if !line_is_empty && current.len() + part.len() + 2 > line_chars {
                lines.push(std::mem::take(&mut current));
                current = "    ".to_string();
                line_is_empty = true;
            }
            if !line_is_empty {
                current.push_str(", ");
            }
            current.push_str(part);
            line_is_empty = false;
        }
        lines.push(current);

        for line in lines {
            if cursor.remaining(content.height) < body.line_height() {
                surface.begin_page();
                cursor = PageCursor::top();
            }
            surface.draw_text(
                Rect::new(config.margin, config.margin + cursor.y, content.width, body.line_height()),
                &line,
                body,
            );
            cursor = cursor.advanced(body.line_height());
        }
    }
    cursor
}
