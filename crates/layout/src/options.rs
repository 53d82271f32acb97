//! Export configuration.
//!
//! Options arrive as one of two tagged variants (a full pattern pack
//! or a single chart) and are normalized exactly once into a
//! `ResolvedOptions` the rest of the engine consumes. Cross-field
//! defaulting rules live here and nowhere else.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartMode {
    Color,
    Stitch,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverviewMode {
    /// Included iff the chart tiles across multiple pages.
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolMode {
    /// Run-length counts keyed to palette index tokens.
    ColorIndex,
    StitchSymbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartVisual {
    pub show_cell_symbols: bool,
    pub show_cell_backgrounds: bool,
    pub symbol_mode: SymbolMode,
}

impl Default for ChartVisual {
    fn default() -> Self {
        Self {
            show_cell_symbols: true,
            show_cell_backgrounds: true,
            symbol_mode: SymbolMode::ColorIndex,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

fn default_true() -> bool {
    true
}

fn untitled() -> String {
    "Untitled Pattern".to_string()
}

/// Full document: any combination of chart modes plus cover, overview
/// and legend scaffolding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPackOptions {
    #[serde(default = "untitled")]
    pub title: String,
    #[serde(default = "default_true")]
    pub include_color_chart: bool,
    #[serde(default)]
    pub include_stitch_chart: bool,
    #[serde(default)]
    pub include_hybrid_chart: bool,
    #[serde(default)]
    pub overview: OverviewMode,
    #[serde(default = "default_true")]
    pub include_cover_page: bool,
    #[serde(default = "default_true")]
    pub include_yarn_requirements: bool,
    #[serde(default)]
    pub include_written_instructions: bool,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub visual: ChartVisual,
    #[serde(default)]
    pub preview: bool,
}

impl Default for PatternPackOptions {
    fn default() -> Self {
        Self {
            title: untitled(),
            include_color_chart: true,
            include_stitch_chart: false,
            include_hybrid_chart: false,
            overview: OverviewMode::Auto,
            include_cover_page: true,
            include_yarn_requirements: true,
            include_written_instructions: false,
            branding: Branding::default(),
            visual: ChartVisual::default(),
            preview: false,
        }
    }
}

/// Minimal document: exactly one chart mode, no cover or legends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOnlyOptions {
    #[serde(default = "untitled")]
    pub title: String,
    pub mode: ChartMode,
    #[serde(default)]
    pub overview: OverviewMode,
    #[serde(default)]
    pub visual: ChartVisual,
    #[serde(default)]
    pub preview: bool,
}

impl ChartOnlyOptions {
    pub fn new(mode: ChartMode) -> Self {
        Self {
            title: untitled(),
            mode,
            overview: OverviewMode::Auto,
            visual: ChartVisual::default(),
            preview: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "export_type", rename_all = "kebab-case")]
pub enum ExportOptions {
    PatternPack(PatternPackOptions),
    ChartOnly(ChartOnlyOptions),
}

/// Options after one-time normalization. Constructed by
/// [`ExportOptions::resolve`], never mutated mid-export.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub title: String,
    /// Chart passes in their fixed rendering order.
    pub chart_modes: Vec<ChartMode>,
    pub overview: OverviewMode,
    pub include_cover_page: bool,
    /// Inline project header, used when there is no cover page.
    /// Chart-only exports carry neither.
    pub include_header: bool,
    pub include_materials: bool,
    pub include_written_instructions: bool,
    pub branding: Branding,
    pub visual: ChartVisual,
    pub preview: bool,
}

impl ExportOptions {
    pub fn resolve(&self) -> ResolvedOptions {
        match self {
            ExportOptions::PatternPack(pack) => {
                let mut chart_modes = Vec::new();
                if pack.include_color_chart {
                    chart_modes.push(ChartMode::Color);
                }
                if pack.include_stitch_chart {
                    chart_modes.push(ChartMode::Stitch);
                }
                if pack.include_hybrid_chart {
                    chart_modes.push(ChartMode::Hybrid);
                }
                ResolvedOptions {
                    title: pack.title.clone(),
                    chart_modes,
                    overview: pack.overview,
                    include_cover_page: pack.include_cover_page,
                    include_header: !pack.include_cover_page,
                    include_materials: pack.include_yarn_requirements,
                    include_written_instructions: pack.include_written_instructions,
                    branding: pack.branding.clone(),
                    visual: pack.visual,
                    preview: pack.preview,
                }
            }
            ExportOptions::ChartOnly(chart) => {
                let mut visual = chart.visual;
                // A bare stitch chart is visually locked: symbols on,
                // backgrounds off, whatever the UI state said.
                if chart.mode == ChartMode::Stitch {
                    visual.show_cell_symbols = true;
                    visual.show_cell_backgrounds = false;
                }
                ResolvedOptions {
                    title: chart.title.clone(),
                    chart_modes: vec![chart.mode],
                    overview: chart.overview,
                    include_cover_page: false,
                    include_header: false,
                    include_materials: false,
                    include_written_instructions: false,
                    branding: Branding::default(),
                    visual,
                    preview: chart.preview,
                }
            }
        }
    }
}

impl ResolvedOptions {
    /// Whether legends should use the stitch-aware (hybrid) layout:
    /// any pass renders stitches, or the color chart overlays stitch
    /// symbols.
    pub fn stitch_aware(&self) -> bool {
        self.chart_modes
            .iter()
            .any(|m| matches!(m, ChartMode::Stitch | ChartMode::Hybrid))
            || (self.chart_modes.contains(&ChartMode::Color)
                && self.visual.show_cell_symbols
                && self.visual.symbol_mode == SymbolMode::StitchSymbol)
    }
}
