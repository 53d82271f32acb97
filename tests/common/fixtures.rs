use yarnpress::layout::LayoutElement;
use yarnpress::types::Color;
use yarnpress::{
    Cell, ExportJob, Grid, Palette, PaletteEntry, PositionedElement, ProjectSettings,
    ResolvedOptions, StitchSet,
};

pub fn checkerboard_grid(width: usize, height: usize) -> Grid {
    let cells = (0..width * height)
        .map(|i| {
            let (row, col) = (i / width, i % width);
            Cell::color(if (row + col) % 2 == 0 { "mc" } else { "cc" })
        })
        .collect();
    Grid::new(width, height, cells).expect("fixture grid dimensions")
}

pub fn demo_palette() -> Palette {
    Palette::new(vec![
        PaletteEntry::new("mc", "Indigo", Color::new(40, 50, 110)),
        PaletteEntry::new("cc", "Shell", Color::new(240, 230, 215)),
    ])
    .expect("fixture palette ids are unique")
}

/// Owns everything an `ExportJob` borrows.
pub struct ProjectFixture {
    pub grid: Grid,
    pub palette: Palette,
    pub stitches: StitchSet,
    pub settings: ProjectSettings,
}

impl ProjectFixture {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            palette: demo_palette(),
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

pub fn page_has_text(page: &[PositionedElement], needle: &str) -> bool {
    page.iter().any(|el| match &el.element {
        LayoutElement::Text(text) => text.content.contains(needle),
        _ => false,
    })
}

pub fn pages_with_text(pages: &[Vec<PositionedElement>], needle: &str) -> usize {
    pages.iter().filter(|p| page_has_text(p, needle)).count()
}
