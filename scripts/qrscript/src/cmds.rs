pub mod gen_test_data_cheb;

// -----------------------------------------------------------------------------
// Commands
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Write reference CSVs (x, y, dy, d2y) of approximants described by JSON cases
    GenTestData(gen_test_data_cheb::Args),
}

impl Commands {
    pub fn run(&self) -> anyhow::Result<()> {
        match self {
            Commands::GenTestData(args) => args.run(),
        }
    }
}
