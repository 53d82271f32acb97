//! lopdf-backed implementation of the `DocumentRenderer` trait.

pub mod renderer;

pub use renderer::PdfDocumentRenderer;
