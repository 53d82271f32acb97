use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Chart cannot be tiled onto the page: {0}")]
    DegeneratePage(String),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod chart;
pub mod config;
pub mod elements;
pub mod flow;
pub mod instructions;
pub mod legend;
pub mod numbering;
pub mod options;
pub mod overview;
pub mod plan;
pub mod surface;

pub use self::config::{LayoutConfig, PageSize};
pub use self::elements::{
    LayoutElement, PositionedElement, RectElement, Stroke, TextAlign, TextElement, TextStyle,
};
pub use self::flow::{ExportJob, PageCursor, compose};
pub use self::instructions::{RowInstruction, written_row_instructions};
pub use self::numbering::{RowDirection, row_direction, run_length_labels};
pub use self::options::{
    Branding, ChartMode, ChartOnlyOptions, ChartVisual, ExportOptions, OverviewMode,
    PatternPackOptions, ResolvedOptions, SymbolMode,
};
pub use self::plan::{PageBudget, TilePlan, TileRegion, plan_tiles};
pub use self::surface::{PageRecorder, Surface};

// Re-export geometry types used throughout to prevent type mismatches
pub use yarnpress_types::{Color, Rect, Size};

#[cfg(test)]
mod flow_test;
#[cfg(test)]
mod numbering_test;
#[cfg(test)]
mod test_utils;
