//! Document model for chart exports.
//!
//! This crate holds the data the layout engine consumes: an immutable
//! grid snapshot, the yarn palette it references, the stitch lookup,
//! and per-project settings. Snapshots are validated at construction;
//! the layout engine never sees a malformed grid.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Grid is {width}x{height} ({expected} cells) but the snapshot holds {actual}.")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Grid dimensions must be positive, got {width}x{height}.")]
    EmptyGrid { width: usize, height: usize },
    #[error("Duplicate palette entry id: '{0}'.")]
    DuplicatePaletteId(String),
}

pub mod grid;
pub mod palette;
pub mod settings;
pub mod stitch;

pub use grid::{Cell, Grid};
pub use palette::{Palette, PaletteEntry};
pub use settings::ProjectSettings;
pub use stitch::{StitchDef, StitchLookup, StitchSet};
