mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::context::init(args.dir.as_deref());

    let result = match &args.command {
        Commands::Init { sample } => cli::commands::init::execute(*sample),
        Commands::List => cli::commands::list::execute(args.verbose),
        Commands::Show { id } => cli::commands::show::execute(*id, args.verbose),
        Commands::Add {
            first_name,
            last_name,
            joined_on,
        } => cli::commands::add::execute(first_name, last_name, joined_on, args.verbose),
        Commands::Update {
            id,
            first_name,
            last_name,
            joined_on,
        } => cli::commands::update::execute(
            *id,
            first_name.as_deref(),
            last_name.as_deref(),
            joined_on.as_deref(),
            args.verbose,
        ),
        Commands::Remove { id } => cli::commands::remove::execute(*id, args.verbose),
        Commands::Log { last, errors_only } => {
            cli::commands::log::execute(*last, *errors_only, args.verbose)
        }
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
