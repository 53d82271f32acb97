//! Stitch definitions and the lookup seam.
//!
//! There is one canonical stitch-id -> definition mapping per session,
//! built from static defaults and extensible at runtime. It is passed
//! to consumers as an explicit `&dyn StitchLookup` dependency.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use yarnpress_types::StitchId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchDef {
    /// Short display glyph drawn inside chart cells.
    pub symbol: String,
    pub name: String,
    /// Standard pattern abbreviation ("sc", "dc", ...).
    pub abbreviation: String,
}

impl StitchDef {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Resolves stitch ids to definitions.
pub trait StitchLookup {
    fn stitch(&self, id: &StitchId) -> Option<&StitchDef>;
}

/// The standard lookup: default stitches plus any custom definitions
/// registered at runtime.
#[derive(Debug, Clone, Default)]
pub struct StitchSet {
    stitches: HashMap<StitchId, StitchDef>,
}

impl StitchSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set seeded with the common crochet stitches.
    pub fn with_defaults() -> Self {
        let mut set = Self::empty();
        for (id, symbol, name, abbr) in [
            ("ch", "o", "Chain", "ch"),
            ("sl", ".", "Slip Stitch", "sl st"),
            ("sc", "+", "Single Crochet", "sc"),
            ("hdc", "T", "Half Double Crochet", "hdc"),
            ("dc", "F", "Double Crochet", "dc"),
            ("tr", "E", "Treble Crochet", "tr"),
            ("inc", "v", "Increase", "inc"),
            ("dec", "^", "Decrease", "dec"),
        ] {
            set.insert(id, StitchDef::new(symbol, name, abbr));
        }
        set
    }

    pub fn insert(&mut self, id: impl Into<StitchId>, def: StitchDef) {
        self.stitches.insert(id.into(), def);
    }

    pub fn len(&self) -> usize {
        self.stitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stitches.is_empty()
    }
}

impl StitchLookup for StitchSet {
    fn stitch(&self, id: &StitchId) -> Option<&StitchDef> {
        self.stitches.get(id)
    }
}
