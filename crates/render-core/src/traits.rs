use crate::error::RenderError;
use std::io::Write;
use yarnpress_layout::PositionedElement;

/// A trait for document renderers, abstracting the document-writing
/// primitives. The layout engine records pages of positioned elements;
/// a renderer turns them into an output document.
pub trait DocumentRenderer {
    fn begin_document(&mut self, page_width: f32, page_height: f32) -> Result<(), RenderError>;

    /// Render one recorded page, in recording order.
    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError>;

    /// Finish the document and write it out.
    fn finalize(self: Box<Self>, writer: &mut dyn Write) -> Result<(), RenderError>;
}
