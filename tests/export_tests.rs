mod common;

use common::TestResult;
use common::fixtures::*;
use std::io::Read;
use yarnpress::{
    Cell, ChartError, ChartMode, ChartOnlyOptions, ExportOptions, Grid, LayoutConfig, PageSize,
    PatternPackOptions, PipelineError, export_pages, export_to_bytes, export_to_writer,
};

fn default_pack() -> ExportOptions {
    ExportOptions::PatternPack(PatternPackOptions::default())
}

#[test]
fn test_pattern_pack_exports_a_pdf() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let fixture = ProjectFixture::new(checkerboard_grid(20, 20));
    let config = LayoutConfig::default();
    let job = fixture.job(default_pack().resolve());

    let pages = export_pages(&job, &config)?;
    // Cover, materials, chart.
    assert_eq!(pages.len(), 3);
    assert_eq!(pages_with_text(&pages, "Color Chart"), 1);
    assert_eq!(pages_with_text(&pages, "Yarn Requirements"), 1);
    assert_eq!(pages_with_text(&pages, "Overview"), 0);

    let bytes = export_to_bytes(&job, &config)?;
    assert!(bytes.starts_with(b"%PDF-1.7"));
    Ok(())
}

#[test]
fn test_chart_only_export_is_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let fixture = ProjectFixture::new(checkerboard_grid(15, 15));
    let config = LayoutConfig::default();
    let options = ExportOptions::ChartOnly(ChartOnlyOptions::new(ChartMode::Color));
    let job = fixture.job(options.resolve());

    let pages = export_pages(&job, &config)?;
    assert_eq!(pages.len(), 1);
    assert!(page_has_text(&pages[0], "Color Chart"));
    Ok(())
}

#[test]
fn test_atlas_export_adds_overview_and_part_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let fixture = ProjectFixture::new(checkerboard_grid(90, 90));
    let config = LayoutConfig {
        page: PageSize::Custom {
            width: 300.0,
            height: 300.0,
        },
        ..LayoutConfig::default()
    };
    let job = fixture.job(default_pack().resolve());

    let pages = export_pages(&job, &config)?;
    let parts = pages_with_text(&pages, "part ");
    assert!(parts > 1);
    assert_eq!(pages_with_text(&pages, "Overview"), 1);
    // Every part title states the same total, so the count of pages
    // carrying "of N" equals N.
    assert_eq!(pages_with_text(&pages, &format!("of {}", parts)), parts);
    Ok(())
}

#[test]
fn test_save_and_preview_deliveries_agree() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let fixture = ProjectFixture::new(checkerboard_grid(12, 12));
    let config = LayoutConfig::default();
    let job = fixture.job(default_pack().resolve());

    let preview = export_to_bytes(&job, &config)?;

    let mut file = tempfile::tempfile()?;
    export_to_writer(&job, &config, &mut file)?;
    use std::io::Seek;
    file.rewind()?;
    let mut saved = Vec::new();
    file.read_to_end(&mut saved)?;

    assert_eq!(preview, saved, "both deliveries produce the same document");
    Ok(())
}

#[test]
fn test_malformed_grid_is_rejected_before_layout() {
    let result = Grid::new(4, 4, vec![Cell::empty(); 15]);
    assert!(matches!(
        result,
        Err(ChartError::CellCountMismatch { expected: 16, actual: 15, .. })
    ));
}

#[test]
fn test_degenerate_page_surfaces_as_layout_error() {
    let _ = env_logger::builder().is_test(true).try_init();

    let fixture = ProjectFixture::new(checkerboard_grid(50, 50));
    let config = LayoutConfig {
        page: PageSize::Custom {
            width: 80.0,
            height: 80.0,
        },
        ..LayoutConfig::default()
    };
    let job = fixture.job(default_pack().resolve());

    let result = export_to_bytes(&job, &config);
    assert!(matches!(result, Err(PipelineError::Layout(_))));
}
