use serde::{Deserialize, Serialize};

fn default_yarn_per_stitch() -> f32 {
    1.0
}

/// Per-project preferences threaded into the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Inches of yarn consumed per stitch; drives yardage estimates.
    #[serde(default = "default_yarn_per_stitch")]
    pub yarn_per_stitch: f32,
    /// Mirrors row traversal for left-handed crocheters.
    #[serde(default)]
    pub left_handed: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            yarn_per_stitch: default_yarn_per_stitch(),
            left_handed: false,
        }
    }
}
