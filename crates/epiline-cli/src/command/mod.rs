use clap::{Parser, Subcommand};

use self::{incidence::IncidenceArg, summary::SummaryArg};

mod incidence;
mod summary;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Count line-list events per period and stratum
    Incidence(#[clap(flatten)] IncidenceArg),
    /// Compute grouped descriptive statistics
    Summary(#[clap(flatten)] SummaryArg),
}

/// Terminal output format shared by both subcommands.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Format {
    #[default]
    Markdown,
    Json,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Incidence(arg) => incidence::run(&arg)?,
        Mode::Summary(arg) => summary::run(&arg)?,
    }
    Ok(())
}
