pub mod assemble;
pub mod config;
pub mod hash;
pub mod palette;
pub mod search;
pub mod username;

pub use assemble::{
    ColorRow, NOT_FOUND_PLACEHOLDER, Report, ResultMapping, explore, explore_with_rng,
};
pub use config::{ConfigError, HueConfig};
pub use hash::{HASH_MODULUS, color_entry, color_index, fast_hash};
pub use palette::{NAME_COLOR_COUNT, Palette, PaletteEntry, REFERENCE_PALETTE};
pub use search::{
    DEFAULT_FLIP_PROBABILITY, DEFAULT_MAX_ATTEMPTS, VariationResult, Variations, search,
    search_with_rng,
};
pub use username::{MAX_USERNAME_LEN, UserName, UserNameError};
