use yarnpress_types::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    Letter,
    A4,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub fn dimensions_pt(self) -> Size {
        match self {
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::A4 => Size::new(595.0, 842.0),
            PageSize::Custom { width, height } => Size::new(width, height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub page: PageSize,
    /// Uniform page margin in points.
    pub margin: f32,
    /// Below this cell size a chart no longer fits one page and is
    /// tiled into an atlas instead.
    pub min_single_page_cell: f32,
    /// Atlas tiles never shrink cells below this.
    pub min_atlas_cell: f32,
    /// Space reserved around a chart for row/column ruler numbers.
    pub ruler_gutter: f32,
    /// Minimum remaining page space for the overview to continue
    /// inline rather than forcing a fresh page.
    pub overview_min_space: f32,
    /// The overview never grows taller than this.
    pub overview_max_height: f32,
    /// Minimum remaining page space for the materials section to
    /// continue inline.
    pub materials_min_space: f32,
    /// Vertical padding between sections sharing a page.
    pub section_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageSize::Letter,
            margin: 36.0,
            min_single_page_cell: 12.0,
            min_atlas_cell: 10.0,
            ruler_gutter: 20.0,
            overview_min_space: 180.0,
            overview_max_height: 320.0,
            materials_min_space: 140.0,
            section_gap: 18.0,
        }
    }
}

impl LayoutConfig {
    /// Page area inside the margins.
    pub fn content_size(&self) -> Size {
        let page = self.page.dimensions_pt();
        Size::new(page.width - 2.0 * self.margin, page.height - 2.0 * self.margin)
    }

    /// Area left for chart cells once ruler gutters are reserved.
    /// Row numbers switch sides per row, so both sides are reserved.
    pub fn chart_area(&self) -> Size {
        let content = self.content_size();
        Size::new(
            content.width - 2.0 * self.ruler_gutter,
            content.height - self.ruler_gutter,
        )
    }
}
