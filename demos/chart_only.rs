//! Exports a bare stitch chart to `chart_only.pdf`.
//!
//! Run with: cargo run --example chart_only

use std::fs::File;
use yarnpress::{
    Cell, ChartMode, ChartOnlyOptions, ExportJob, ExportOptions, Grid, LayoutConfig, Palette,
    PaletteEntry, PipelineError, ProjectSettings, StitchSet, export_to_writer, types::Color,
};

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    // A granny-square-ish motif: double crochets with chain corners.
    let mut cells = vec![Cell::empty(); 12 * 12];
    for row in 0..12 {
        for col in 0..12 {
            let cell = &mut cells[row * 12 + col];
            cell.color = Some("bg".into());
            cell.stitch = Some(if (row + col) % 4 == 0 { "ch" } else { "dc" }.into());
        }
    }
    let grid = Grid::new(12, 12, cells)?;
    let palette = Palette::new(vec![PaletteEntry::new(
        "bg",
        "Mustard",
        Color::new(222, 168, 47),
    )])?;
    let stitches = StitchSet::with_defaults();
    let settings = ProjectSettings::default();

    let options = ExportOptions::ChartOnly(ChartOnlyOptions::new(ChartMode::Stitch));
    let job = ExportJob {
        grid: &grid,
        palette: &palette,
        stitches: &stitches,
        settings: &settings,
        options: options.resolve(),
    };

    let mut file = File::create("chart_only.pdf")?;
    export_to_writer(&job, &LayoutConfig::default(), &mut file)?;
    println!("wrote chart_only.pdf");
    Ok(())
}
