use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::config::ConfigError;

/// Number of colors in the reference palette.
pub const NAME_COLOR_COUNT: usize = 10;

/// The reference palette, in display order.
pub const REFERENCE_PALETTE: [&str; NAME_COLOR_COUNT] = [
    "#aaaaaa", "#006699", "#cc6600", "#d400d4", "#009933", "#ff6600", "#006666", "#b63d3d",
    "#9763cb", "#0099cc",
];

/// One palette slot: its 1-based display ordinal and its color.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub ordinal: usize,
    pub color: SmolStr,
}

impl PaletteEntry {
    /// The color index this entry corresponds to.
    pub fn index(&self) -> usize {
        self.ordinal - 1
    }
}

impl fmt::Display for PaletteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color {}: {}", self.ordinal, self.color)
    }
}

/// An ordered, non-empty list of `#rrggbb` display colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SmolStr>", into = "Vec<SmolStr>")]
pub struct Palette(Vec<SmolStr>);

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let colors: Vec<SmolStr> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(bad) = colors.iter().find(|c| !COLOR_RE.is_match(c)) {
            return Err(ConfigError::InvalidColor(bad.clone()));
        }
        Ok(Self(colors))
    }

    pub fn reference() -> Self {
        Self(REFERENCE_PALETTE.iter().map(|&c| SmolStr::new_static(c)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, since a palette cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn color(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(SmolStr::as_str)
    }

    pub fn entry(&self, index: usize) -> Option<PaletteEntry> {
        self.0.get(index).map(|color| PaletteEntry {
            ordinal: index + 1,
            color: color.clone(),
        })
    }

    /// Entries in ordinal order.
    pub fn entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        self.0.iter().enumerate().map(|(index, color)| PaletteEntry {
            ordinal: index + 1,
            color: color.clone(),
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<Vec<SmolStr>> for Palette {
    type Error = ConfigError;

    fn try_from(value: Vec<SmolStr>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Palette> for Vec<SmolStr> {
    fn from(value: Palette) -> Self {
        value.0
    }
}

static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));
