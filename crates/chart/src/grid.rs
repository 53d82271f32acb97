use crate::ChartError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use yarnpress_types::{ColorId, StitchId};

/// One painted cell: an optional yarn color and an optional stitch.
/// Both are references into external lookups, never embedded data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stitch: Option<StitchId>,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn color(id: impl Into<ColorId>) -> Self {
        Self {
            color: Some(id.into()),
            stitch: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.color.is_none() && self.stitch.is_none()
    }
}

/// An immutable per-export snapshot of the painted grid.
///
/// Cells are stored dense, row-major. The cell-count invariant is
/// enforced at construction so every consumer can index freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Raw wire shape of a grid, before validation.
#[derive(Deserialize)]
struct GridSnapshot {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = ChartError;

    fn try_from(raw: GridSnapshot) -> Result<Self, Self::Error> {
        Grid::new(raw.width, raw.height, raw.cells)
    }
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, ChartError> {
        if width == 0 || height == 0 {
            return Err(ChartError::EmptyGrid { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(ChartError::CellCountMismatch {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// A width x height grid of blank cells.
    pub fn blank(width: usize, height: usize) -> Result<Self, ChartError> {
        Self::new(width, height, vec![Cell::empty(); width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.width + col]
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count of cells referencing each palette entry. Derived fresh
    /// per export, never stored.
    pub fn usage_counts(&self) -> HashMap<ColorId, usize> {
        let mut counts = HashMap::new();
        for cell in &self.cells {
            if let Some(id) = &cell.color {
                *counts.entry(id.clone()).or_insert(0usize) += 1;
            }
        }
        counts
    }

    /// Distinct stitch ids actually used, in first-appearance order.
    pub fn used_stitches(&self) -> Vec<StitchId> {
        let mut seen = Vec::new();
        for cell in &self.cells {
            if let Some(id) = &cell.stitch {
                if !seen.contains(id) {
                    seen.push(id.clone());
                }
            }
        }
        seen
    }

    pub fn has_stitches(&self) -> bool {
        self.cells.iter().any(|c| c.stitch.is_some())
    }
}
