use clap::Parser;
use messages_patcher::{Args, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    run(args)
}
