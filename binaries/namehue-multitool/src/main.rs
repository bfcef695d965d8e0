mod commands;
mod shared;

use clap::Parser;
use shared::GlobalArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namehue-multitool")]
struct Args {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("namehue_multitool=info,namehue_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    args.command.run(&args.global)
}
