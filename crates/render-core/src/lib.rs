pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
