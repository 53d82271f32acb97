use crate::ChartError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use yarnpress_types::{Color, ColorId};

/// One yarn in the project palette. Cells reference entries by id;
/// the entry itself is only ever looked up, never embedded in a grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub id: ColorId,
    pub name: String,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yarn_weight: Option<String>,
    /// Yards per skein. Falls back to a standard worsted put-up when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skein_length: Option<f32>,
}

impl PaletteEntry {
    pub fn new(id: impl Into<ColorId>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            brand: None,
            yarn_weight: None,
            skein_length: None,
        }
    }
}

/// Ordered palette with id lookup. Declaration order is significant:
/// it fixes each entry's display symbol token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<PaletteEntry>", into = "Vec<PaletteEntry>")]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    by_id: HashMap<ColorId, usize>,
}

impl TryFrom<Vec<PaletteEntry>> for Palette {
    type Error = ChartError;

    fn try_from(entries: Vec<PaletteEntry>) -> Result<Self, Self::Error> {
        Palette::new(entries)
    }
}

impl From<Palette> for Vec<PaletteEntry> {
    fn from(palette: Palette) -> Self {
        palette.entries
    }
}

impl Palette {
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, ChartError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.clone(), idx).is_some() {
                return Err(ChartError::DuplicatePaletteId(entry.id.to_string()));
            }
        }
        Ok(Self { entries, by_id })
    }

    pub fn get(&self, id: &ColorId) -> Option<&PaletteEntry> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The display token for an entry in the color-index symbol mode:
    /// "1", "2", ... in palette declaration order. Stable for a given
    /// palette ordering; assigned to every entry, used or not.
    pub fn symbol_token(&self, id: &ColorId) -> Option<String> {
        self.by_id.get(id).map(|idx| (idx + 1).to_string())
    }
}
