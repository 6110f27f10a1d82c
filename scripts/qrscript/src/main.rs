use clap::Parser;

mod cmds;
mod util;

#[derive(Debug, Parser)]
#[command(about = "Developers' utilities for qcheb")]
struct Cli {
    #[command(subcommand)]
    command: cmds::Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level", global = true, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    env_logger::builder().filter_level(cli.log_level).init();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("⚙️  qrscript: developers' utilities⚙️");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    log::info!("{:?}", cli);
    cli.command.run()
}
