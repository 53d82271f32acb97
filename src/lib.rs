//! # yarnpress
//!
//! Export engine for painted stitch grids (crochet and knitting
//! charts). The layout core decides what goes on which page: whether a
//! chart fits one page or tiles into a multi-page atlas, where cover,
//! overview and legend sections fall, and how overview boxes
//! cross-reference atlas pages. Rendering is pluggable; the bundled
//! backend writes PDFs via `lopdf`.
//!
//! The pipeline is one synchronous pass: snapshot in, paginated
//! document out. A failed layout never produces a partial document.
//!
//! - **chart**: grid snapshot, palette, stitch lookup
//! - **layout**: tiling planner, flow sequencer, section renderers
//! - **render**: `DocumentRenderer` trait and the lopdf backend
//!
//! Delivery is the caller's choice: [`export_to_writer`] for saving to
//! a file, [`export_to_bytes`] when the document is previewed in
//! memory.

// Re-export foundation crates
pub use yarnpress_chart as chart;
pub use yarnpress_layout as layout;
pub use yarnpress_render_core as render;
pub use yarnpress_types as types;

// Re-export commonly used types
pub use yarnpress_chart::{
    Cell, ChartError, Grid, Palette, PaletteEntry, ProjectSettings, StitchDef, StitchLookup,
    StitchSet,
};
pub use yarnpress_layout::{
    Branding, ChartMode, ChartOnlyOptions, ChartVisual, ExportJob, ExportOptions, LayoutConfig,
    LayoutError, OverviewMode, PageRecorder, PageSize, PatternPackOptions, PositionedElement,
    ResolvedOptions, SymbolMode, compose,
};
pub use yarnpress_render_core::{DocumentRenderer, RenderError};
pub use yarnpress_render_lopdf::PdfDocumentRenderer;

use std::io::Write;
use thiserror::Error;

/// The main error enum for all high-level export operations.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Chart data error: {0}")]
    Chart(#[from] ChartError),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lay the document out and return the recorded pages without
/// rendering them. Useful for previews and tests.
pub fn export_pages(
    job: &ExportJob,
    config: &LayoutConfig,
) -> Result<Vec<Vec<PositionedElement>>, PipelineError> {
    let mut recorder = PageRecorder::new(config.page.dimensions_pt());
    compose(job, config, &mut recorder)?;
    Ok(recorder.into_pages())
}

/// Full pipeline: layout, then render everything as a PDF into
/// `writer`.
pub fn export_to_writer(
    job: &ExportJob,
    config: &LayoutConfig,
    writer: &mut dyn Write,
) -> Result<(), PipelineError> {
    let pages = export_pages(job, config)?;
    let size = config.page.dimensions_pt();

    let mut renderer = Box::new(PdfDocumentRenderer::new());
    renderer.begin_document(size.width, size.height)?;
    for page in &pages {
        renderer.render_page(page)?;
    }
    renderer.finalize(writer)?;
    log::info!("exported {} pages", pages.len());
    Ok(())
}

/// Full pipeline into an in-memory buffer, for preview delivery.
pub fn export_to_bytes(job: &ExportJob, config: &LayoutConfig) -> Result<Vec<u8>, PipelineError> {
    let mut bytes = Vec::new();
    export_to_writer(job, config, &mut bytes)?;
    Ok(bytes)
}
