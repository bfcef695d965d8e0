use rand::Rng;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::config::HueConfig;
use crate::palette::Palette;
use crate::search::{VariationResult, search_with_rng};

/// Shown in place of an example for colors the search never reached.
pub const NOT_FOUND_PLACEHOLDER: &str = "No variation found";

/// First example found per color, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMapping(Vec<VariationResult>);

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `result` unless its color already has an example. Returns
    /// whether it was recorded.
    pub fn insert(&mut self, result: VariationResult) -> bool {
        if self.get(result.color).is_some() {
            return false;
        }
        self.0.push(result);
        true
    }

    pub fn get(&self, color: usize) -> Option<&str> {
        self.0
            .iter()
            .find(|r| r.color == color)
            .map(|r| r.variation.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariationResult> {
        self.0.iter()
    }
}

impl FromIterator<VariationResult> for ResultMapping {
    fn from_iter<I: IntoIterator<Item = VariationResult>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for result in iter {
            mapping.insert(result);
        }
        mapping
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRow {
    pub ordinal: usize,
    pub color: SmolStr,
    pub example: Option<String>,
}

impl ColorRow {
    /// The example, or the placeholder when there is none.
    pub fn text(&self) -> &str {
        self.example.as_deref().unwrap_or(NOT_FOUND_PLACEHOLDER)
    }
}

/// One row per palette entry, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<ColorRow>,
}

impl Report {
    pub fn assemble(palette: &Palette, mapping: &ResultMapping) -> Self {
        let rows = palette
            .entries()
            .map(|entry| ColorRow {
                example: mapping.get(entry.index()).map(str::to_owned),
                ordinal: entry.ordinal,
                color: entry.color,
            })
            .collect();
        Self { rows }
    }

    /// Rows without an example.
    pub fn missing(&self) -> usize {
        self.rows.iter().filter(|row| row.example.is_none()).count()
    }

    pub fn advisory(&self) -> Option<String> {
        let missing = self.missing();
        if missing == 0 {
            return None;
        }
        let plural = if missing > 1 { "s" } else { "" };
        Some(format!(
            "Could not find variations for {missing} color{plural}. Try a different username."
        ))
    }
}

/// Runs the whole pipeline for one input: search, collect, assemble.
/// Surrounding whitespace is ignored; a blank input gives an empty report.
pub fn explore(input: &str, config: &HueConfig) -> Report {
    explore_with_rng(input, config, rand::rng())
}

pub fn explore_with_rng<R: Rng>(input: &str, config: &HueConfig, rng: R) -> Report {
    let input = input.trim();
    if input.is_empty() {
        return Report::default();
    }
    let mapping: ResultMapping = search_with_rng(input, config, rng).collect();
    Report::assemble(&config.palette, &mapping)
}
