pub mod color;
pub mod palette;
pub mod variations;

use clap::Subcommand;

use crate::shared::GlobalArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Show which palette color a name is drawn in.
    Color(color::Args),
    /// Find one case-variation of a name per palette color.
    Variations(variations::Args),
    /// List the configured palette.
    Palette(palette::Args),
}

impl Command {
    pub fn run(self, global: &GlobalArgs) -> anyhow::Result<()> {
        match self {
            Command::Color(args) => color::run(args, global),
            Command::Variations(args) => variations::run(args, global),
            Command::Palette(args) => palette::run(args, global),
        }
    }
}
