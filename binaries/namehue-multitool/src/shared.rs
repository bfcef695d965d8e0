use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use namehue_core::{HueConfig, UserName};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

#[derive(Args, Clone)]
pub struct GlobalArgs {
    /// TOML file overriding the palette, attempt ceiling, flip probability or modulus.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
    /// Seed the case-flip RNG for reproducible output.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// Accept names the input field would reject.
    #[arg(long, global = true)]
    pub no_validate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl GlobalArgs {
    pub fn load_config(&self) -> anyhow::Result<HueConfig> {
        let Some(path) = &self.config else {
            return Ok(HueConfig::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = HueConfig::from_toml(&raw)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::debug!(path = %path.display(), colors = config.color_count(), "loaded config");
        Ok(config)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Trims `name` and, unless disabled, checks it the way the input field does.
    pub fn accept_name<'a>(&self, name: &'a str) -> anyhow::Result<&'a str> {
        let name = name.trim();
        if !self.no_validate {
            UserName::parse(name).with_context(|| format!("invalid username {name:?}"))?;
        }
        Ok(name)
    }

    pub fn print<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            Format::Json => {
                let json = serde_json::to_string_pretty(value)?;
                println!("{json}");
            }
            Format::Yaml => {
                let yaml = serde_yml::to_string(value)?;
                print!("{yaml}");
            }
        }
        Ok(())
    }
}
