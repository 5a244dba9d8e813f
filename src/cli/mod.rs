pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Manage your roster. Watch every call. Never miss an anniversary.
#[derive(Parser, Debug)]
#[command(name = "rosterly", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to an alternative data directory
    #[arg(long, global = true)]
    pub dir: Option<String>,

    /// Echo call log lines to the terminal as they are written
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a roster in the current project
    Init {
        /// Seed the roster with the 20-employee demo data
        #[arg(long)]
        sample: bool,
    },

    /// List all employees
    List,

    /// Show one employee
    Show {
        /// Employee id
        id: u32,
    },

    /// Add a new employee
    Add {
        /// First name
        #[arg(long)]
        first_name: String,
        /// Last name
        #[arg(long)]
        last_name: String,
        /// Joining date (YYYY-MM-DD)
        #[arg(long)]
        joined_on: String,
    },

    /// Update an existing employee
    Update {
        /// Employee id
        id: u32,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
        /// New joining date (YYYY-MM-DD)
        #[arg(long)]
        joined_on: Option<String>,
    },

    /// Remove an employee
    Remove {
        /// Employee id
        id: u32,
    },

    /// Show the call log
    Log {
        /// Show last N lines
        #[arg(long)]
        last: Option<usize>,
        /// Only error-level lines
        #[arg(long)]
        errors_only: bool,
    },
}
