use clap::{Parser, Subcommand};

mod cli;

#[derive(Parser)]
#[command(
    name = "spanfmt",
    version,
    about = "Declaration summaries, tree dumps and flag names for exported syntax trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a spanfmt.toml with the default summary rules
    Init(cli::init::InitArgs),
    /// Print an indented dump of a tree file
    Dump(cli::dump::DumpArgs),
    /// Print the one-line declaration summary of a node
    Summary(cli::summary::SummaryArgs),
    /// Print the names of the bits set in a flag value
    Flags(cli::flags::FlagsArgs),
    /// Validate a tree file and report problems
    Check(cli::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Init(args) => cli::init::cmd_init(args),
        Command::Dump(args) => cli::dump::cmd_dump(args),
        Command::Summary(args) => cli::summary::cmd_summary(args),
        Command::Flags(args) => cli::flags::cmd_flags(args),
        Command::Check(args) => cli::check::cmd_check(args),
    }
}
