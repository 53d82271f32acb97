use crate::LayoutError;
use crate::config::{LayoutConfig, PageSize};
use crate::elements::LayoutElement;
use crate::flow::compose;
use crate::options::{
    ChartMode, ChartOnlyOptions, ExportOptions, OverviewMode, PatternPackOptions,
};
use crate::surface::Surface;
use crate::test_utils::{
    Fixture, page_contains_text, pages_containing, recorder, small_page_config, solid_grid,
    test_palette,
};
use yarnpress_chart::{Cell, Grid};

fn pattern_pack(options: PatternPackOptions) -> crate::options::ResolvedOptions {
    ExportOptions::PatternPack(options).resolve()
}

#[test]
fn test_small_pattern_pack_with_default_options() {
    let fixture = Fixture::new(solid_grid(20, 20, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    compose(
        &fixture.job(pattern_pack(PatternPackOptions::default())),
        &config,
        &mut surface,
    )
    .unwrap();

    let pages = surface.pages();
    // Single-page chart: auto overview stays out.
    assert!(pages_containing(pages, "Overview").is_empty());
    assert_eq!(pages_containing(pages, "Color Chart").len(), 1);
    assert!(pages_containing(pages, "part ").is_empty());

    // Materials present, keyed by the palette index token.
    let materials = pages_containing(pages, "Yarn Requirements");
    assert_eq!(materials.len(), 1);
    assert!(page_contains_text(materials[0], "1"));
    assert!(page_contains_text(materials[0], "Yarn A"));
}

#[test]
fn test_large_grid_becomes_atlas_with_matching_overview() {
    let fixture = Fixture::new(solid_grid(90, 90, "a"), test_palette(&["a"]));
    let config = small_page_config();
    let mut surface = recorder(&config);

    compose(
        &fixture.job(pattern_pack(PatternPackOptions::default())),
        &config,
        &mut surface,
    )
    .unwrap();

    let pages = surface.pages();
    let chart_pages = pages_containing(pages, "part ");
    assert!(chart_pages.len() > 1, "a 90x90 grid cannot fit one small page");
    let total = chart_pages.len();

    // Auto overview turns on for the atlas, and its box labels map
    // 1:1 onto the chart part numbers.
    let overview_pages = pages_containing(pages, "Overview");
    assert_eq!(overview_pages.len(), 1);
    for part in 1..=total {
        assert!(
            page_contains_text(overview_pages[0], &part.to_string()),
            "overview must label atlas page {}",
            part
        );
        assert_eq!(
            pages_containing(pages, &format!("part {} of {}", part, total)).len(),
            1
        );
    }
}

#[test]
fn test_cover_page_then_chart_owns_fresh_page() {
    let fixture = Fixture::new(solid_grid(10, 10, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        title: "Shell Wrap".to_string(),
        include_yarn_requirements: false,
        overview: OverviewMode::Never,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let pages = surface.pages();
    assert_eq!(pages.len(), 2);
    assert!(page_contains_text(&pages[0], "Shell Wrap"));
    assert!(page_contains_text(&pages[1], "Color Chart"));
    assert!(!page_contains_text(&pages[0], "Color Chart"));
}

#[test]
fn test_charts_never_share_a_page_with_prior_sections() {
    let fixture = Fixture::new(solid_grid(12, 12, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        include_cover_page: false,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let pages = surface.pages();
    // Header and materials share page one; the chart starts fresh.
    assert!(page_contains_text(&pages[0], "Yarn Requirements"));
    let chart_pages = pages_containing(pages, "Color Chart");
    assert_eq!(chart_pages.len(), 1);
    assert!(!page_contains_text(chart_pages[0], "Yarn Requirements"));
}

#[test]
fn test_chart_passes_render_in_fixed_order() {
    let mut cells = vec![Cell::color("a"); 100];
    for cell in cells.iter_mut().take(10) {
        cell.stitch = Some("sc".into());
    }
    let fixture = Fixture::new(
        Grid::new(10, 10, cells).unwrap(),
        test_palette(&["a"]),
    );
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        include_stitch_chart: true,
        include_hybrid_chart: true,
        include_yarn_requirements: false,
        include_cover_page: false,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let pages = surface.pages();
    let page_of = |needle: &str| {
        pages
            .iter()
            .position(|p| page_contains_text(p, needle))
            .unwrap_or_else(|| panic!("no page contains '{}'", needle))
    };
    let color = page_of("Color Chart");
    let stitch = page_of("Stitch Chart");
    let hybrid = page_of("Color and Stitch Chart");
    assert!(color < stitch && stitch < hybrid);

    // Stitches are in play, so the stitch guide closes the document.
    assert!(page_of("Stitch Guide") > hybrid);
}

#[test]
fn test_stitch_legend_omitted_when_no_stitches_used() {
    let fixture = Fixture::new(solid_grid(10, 10, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        include_stitch_chart: true,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    assert!(pages_containing(surface.pages(), "Stitch Guide").is_empty());
}

#[test]
fn test_overview_always_applies_to_single_page_charts() {
    let fixture = Fixture::new(solid_grid(10, 10, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        overview: OverviewMode::Always,
        include_cover_page: false,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    assert_eq!(pages_containing(surface.pages(), "Overview").len(), 1);
}

#[test]
fn test_overview_never_suppresses_atlas_overview() {
    let fixture = Fixture::new(solid_grid(90, 90, "a"), test_palette(&["a"]));
    let config = small_page_config();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        overview: OverviewMode::Never,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    assert!(pages_containing(surface.pages(), "Overview").is_empty());
}

#[test]
fn test_chart_only_is_a_bare_chart() {
    let fixture = Fixture::new(solid_grid(10, 10, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = ExportOptions::ChartOnly(ChartOnlyOptions::new(ChartMode::Color)).resolve();
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let pages = surface.pages();
    assert_eq!(pages.len(), 1);
    assert!(page_contains_text(&pages[0], "Color Chart"));
    assert!(pages_containing(pages, "Yarn Requirements").is_empty());
}

#[test]
fn test_degenerate_page_fails_before_any_page_is_emitted() {
    let fixture = Fixture::new(solid_grid(100, 100, "a"), test_palette(&["a"]));
    let config = LayoutConfig {
        page: PageSize::Custom {
            width: 80.0,
            height: 80.0,
        },
        ..LayoutConfig::default()
    };
    let mut surface = recorder(&config);

    let result = compose(
        &fixture.job(pattern_pack(PatternPackOptions::default())),
        &config,
        &mut surface,
    );
    assert!(matches!(result, Err(LayoutError::DegeneratePage(_))));
    assert_eq!(surface.page_count(), 0, "planning errors precede drawing");
}

#[test]
fn test_unresolvable_color_degrades_to_blank_cells() {
    let fixture = Fixture::new(solid_grid(8, 8, "ghost"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = ExportOptions::ChartOnly(ChartOnlyOptions::new(ChartMode::Color)).resolve();
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let page = &surface.pages()[0];
    let filled = page.iter().any(|el| {
        matches!(&el.element, LayoutElement::Rect(r) if r.fill.is_some())
    });
    assert!(!filled, "unknown palette references render blank, not as errors");
}

#[test]
fn test_written_instructions_close_the_pack() {
    let fixture = Fixture::new(solid_grid(6, 4, "a"), test_palette(&["a"]));
    let config = LayoutConfig::default();
    let mut surface = recorder(&config);

    let options = pattern_pack(PatternPackOptions {
        include_written_instructions: true,
        include_cover_page: false,
        ..PatternPackOptions::default()
    });
    compose(&fixture.job(options), &config, &mut surface).unwrap();

    let pages = surface.pages();
    let instructions = pages_containing(pages, "Written Instructions");
    assert_eq!(instructions.len(), 1);
    assert!(page_contains_text(instructions[0], "Row 1 (left to right): 6 Yarn A"));
    assert!(page_contains_text(instructions[0], "Row 2 (right to left): 6 Yarn A"));
    // Instructions come after the chart and own their page.
    assert!(!page_contains_text(instructions[0], "Color Chart"));
}
