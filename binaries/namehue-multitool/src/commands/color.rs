use clap::Parser;
use namehue_core::{HueConfig, color_entry, color_index, fast_hash};
use serde::Serialize;

use crate::shared::GlobalArgs;

#[derive(Parser)]
pub struct Args {
    name: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct Output<'a> {
    name: &'a str,
    hash: u64,
    index: usize,
    ordinal: usize,
    color: String,
}

pub fn run(args: Args, global: &GlobalArgs) -> anyhow::Result<()> {
    let config = global.load_config()?;
    let name = global.accept_name(&args.name)?;
    global.print(&build_output(name, &config))
}

fn build_output<'a>(name: &'a str, config: &HueConfig) -> Output<'a> {
    let entry = color_entry(name, config);
    Output {
        name,
        hash: fast_hash(name, config.modulus),
        index: color_index(name, config),
        ordinal: entry.ordinal,
        color: entry.color.to_string(),
    }
}
