//! Geometry planner: decides whether a chart fits one page or must be
//! tiled into a multi-page atlas, and computes the tile regions.
//!
//! The plan is computed once per export and the same value is handed
//! to both the overview and the chart passes, so their page numbering
//! can never drift apart.

use crate::LayoutError;

/// One page-sized rectangular sub-range of the grid. Ranges are
/// half-open cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// 0-based, assigned in the order regions are produced.
    pub page_index: usize,
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl TileRegion {
    pub fn rows(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn cols(&self) -> usize {
        self.end_col - self.start_col
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TilePlan {
    pub multi_page: bool,
    /// Points per grid cell, identical across all regions of one plan.
    pub cell_size: f32,
    pub regions: Vec<TileRegion>,
}

/// Page capacity constraints for the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBudget {
    pub avail_width: f32,
    pub avail_height: f32,
    /// Height budget for the first atlas band. Charts start on fresh
    /// pages in this document flow, so callers currently pass
    /// `avail_height`; the planner honors whatever it is given and a
    /// flow that let charts continue inline would thread the actual
    /// remaining space here instead.
    pub first_band_height: f32,
}

impl PageBudget {
    pub fn full_page(avail_width: f32, avail_height: f32) -> Self {
        Self {
            avail_width,
            avail_height,
            first_band_height: avail_height,
        }
    }
}

/// Decide single-page vs. atlas and compute the covering regions.
///
/// Regions are emitted in row-major band order: all tiles of one
/// vertical band left to right, then the next band down. `page_index`
/// increments in emission order.
///
/// An atlas whose page is too narrow for even one cell column yields
/// an empty region list; callers must treat that as unrenderable. A
/// band that would hold zero rows is a fatal planning error.
pub fn plan_tiles(
    grid_width: usize,
    grid_height: usize,
    budget: PageBudget,
    min_single_page_cell: f32,
    min_atlas_cell: f32,
) -> Result<TilePlan, LayoutError> {
    let fit = (budget.avail_width / grid_width as f32)
        .min(budget.avail_height / grid_height as f32);

    let single_cell = fit.floor();
    if single_cell >= min_single_page_cell {
        log::debug!(
            "chart {}x{} fits a single page at cell size {}",
            grid_width,
            grid_height,
            single_cell
        );
        return Ok(TilePlan {
            multi_page: false,
            cell_size: single_cell,
            regions: vec![TileRegion {
                page_index: 0,
                start_row: 0,
                end_row: grid_height,
                start_col: 0,
                end_col: grid_width,
            }],
        });
    }

    // Atlas fallback: cells shrink toward the page fit but never below
    // the atlas minimum.
    let cell_size = fit.max(min_atlas_cell);
    let cols_per_page = (budget.avail_width / cell_size).floor() as isize;
    if cols_per_page <= 0 {
        log::warn!(
            "page width {:.1} cannot hold a single {:.1}pt cell column",
            budget.avail_width,
            cell_size
        );
        return Ok(TilePlan {
            multi_page: true,
            cell_size,
            regions: Vec::new(),
        });
    }
    let cols_per_page = cols_per_page as usize;

    let first_band_rows = (budget.first_band_height / cell_size).floor() as isize;
    let full_band_rows = (budget.avail_height / cell_size).floor() as isize;

    let mut regions = Vec::new();
    let mut page_index = 0;
    let mut row = 0;
    let mut band = 0;
    while row < grid_height {
        let band_rows = if band == 0 { first_band_rows } else { full_band_rows };
        if band_rows <= 0 {
            return Err(LayoutError::DegeneratePage(format!(
                "band {} holds zero rows at cell size {:.1} (page height {:.1})",
                band, cell_size, budget.avail_height
            )));
        }
        let end_row = (row + band_rows as usize).min(grid_height);

        let mut col = 0;
        while col < grid_width {
            let end_col = (col + cols_per_page).min(grid_width);
            regions.push(TileRegion {
                page_index,
                start_row: row,
                end_row,
                start_col: col,
                end_col,
            });
            page_index += 1;
            col = end_col;
        }

        row = end_row;
        band += 1;
    }

    log::debug!(
        "chart {}x{} tiled into {} atlas pages at cell size {:.1}",
        grid_width,
        grid_height,
        regions.len(),
        cell_size
    );
    Ok(TilePlan {
        multi_page: true,
        cell_size,
        regions,
    })
}
