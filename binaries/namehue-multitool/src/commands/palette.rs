use clap::Parser;
use namehue_core::{HueConfig, PaletteEntry};
use serde::Serialize;

use crate::shared::GlobalArgs;

#[derive(Parser)]
pub struct Args {}

#[derive(Debug, Serialize)]
struct Output {
    max_attempts: u32,
    flip_probability: f64,
    modulus: u64,
    colors: Vec<PaletteEntry>,
}

pub fn run(_args: Args, global: &GlobalArgs) -> anyhow::Result<()> {
    let config = global.load_config()?;
    global.print(&build_output(&config))
}

fn build_output(config: &HueConfig) -> Output {
    Output {
        max_attempts: config.max_attempts,
        flip_probability: config.flip_probability,
        modulus: config.modulus.get(),
        colors: config.palette.entries().collect(),
    }
}
