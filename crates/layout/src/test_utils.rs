use crate::config::{LayoutConfig, PageSize};
use crate::elements::{LayoutElement, PositionedElement};
use crate::flow::ExportJob;
use crate::options::ResolvedOptions;
use crate::surface::PageRecorder;
use yarnpress_chart::{Cell, Grid, Palette, PaletteEntry, ProjectSettings, StitchSet};
use yarnpress_types::Color;

/// Palette with one entry per id, colors spread across the range so
/// contrast behavior is observable.
pub fn test_palette(ids: &[&str]) -> Palette {
    let entries = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let value = ((i * 60) % 255) as u8;
            PaletteEntry::new(*id, format!("Yarn {}", id.to_uppercase()), Color::new(value, value, value))
        })
        .collect();
    Palette::new(entries).expect("test palette ids must be unique")
}

pub fn solid_grid(width: usize, height: usize, color_id: &str) -> Grid {
    Grid::new(width, height, vec![Cell::color(color_id); width * height])
        .expect("test grid dimensions")
}

pub fn row_of(colors: &[Option<&str>]) -> Vec<Cell> {
    colors
        .iter()
        .map(|c| match c {
            Some(id) => Cell::color(*id),
            None => Cell::empty(),
        })
        .collect()
}

/// Everything an `ExportJob` borrows, bundled so tests can build jobs
/// without fighting lifetimes.
pub struct Fixture {
    pub grid: Grid,
    pub palette: Palette,
    pub stitches: StitchSet,
    pub settings: ProjectSettings,
}

impl Fixture {
    pub fn new(grid: Grid, palette: Palette) -> Self {
        Self {
            grid,
            palette,
            stitches: StitchSet::with_defaults(),
            settings: ProjectSettings::default(),
        }
    }

    pub fn job(&self, options: ResolvedOptions) -> ExportJob<'_> {
        ExportJob {
            grid: &self.grid,
            palette: &self.palette,
            stitches: &self.stitches,
            settings: &self.settings,
            options,
        }
    }
}

pub fn recorder(config: &LayoutConfig) -> PageRecorder {
    PageRecorder::new(config.page.dimensions_pt())
}

/// A page small enough to force atlas tiling for mid-size grids.
pub fn small_page_config() -> LayoutConfig {
    LayoutConfig {
        page: PageSize::Custom {
            width: 300.0,
            height: 300.0,
        },
        ..LayoutConfig::default()
    }
}

pub fn page_text_contents(page: &[PositionedElement]) -> Vec<String> {
    page.iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Text(text) => Some(text.content.clone()),
            _ => None,
        })
        .collect()
}

pub fn page_contains_text(page: &[PositionedElement], needle: &str) -> bool {
    page_text_contents(page).iter().any(|t| t.contains(needle))
}

pub fn pages_containing<'a>(
    pages: &'a [Vec<PositionedElement>],
    needle: &str,
) -> Vec<&'a Vec<PositionedElement>> {
    pages.iter().filter(|p| page_contains_text(p, needle)).collect()
}
