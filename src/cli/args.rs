//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::Traversal;

/// Course planner: browse a course catalog and check its prerequisites
#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Extra config file, layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Course file (default: data_file from config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default); loads --file up front when given
    Menu,

    /// Print every course as "NUMBER, TITLE"
    List {
        /// Visitation order (default: listing_order from config)
        #[arg(short, long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Print one course and its prerequisites
    Show {
        /// Course number, any case
        course: String,
    },

    /// Report prerequisites that name unknown courses
    Validate,

    /// Draw the shape of the search tree
    Tree,

    /// Inspect settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
}

/// Traversal order as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Ascending course number
    In,
    /// Node before its subtrees
    Pre,
    /// Node after its subtrees
    Post,
}

impl From<OrderArg> for Traversal {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::In => Traversal::In,
            OrderArg::Pre => Traversal::Pre,
            OrderArg::Post => Traversal::Post,
        }
    }
}
