//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use garou_core::FillPolicy;

#[derive(Parser, Debug)]
#[command(name = "garou")]
#[command(about = "Okizeme frame planner for Fatal Fury: City of the Wolves")]
#[command(version)]
pub struct Args {
    /// Configuration file
    #[arg(short, long, default_value = "garou.toml", global = true)]
    pub config: PathBuf,

    /// Data directory, overrides the configuration file
    #[arg(long, env = "GAROU_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the roster with dodge-attack startups
    Characters,

    /// Show a character's frame table
    Frames {
        character: String,

        /// Only moves with a startup, fastest first
        #[arg(long)]
        opponent: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage registered combos
    Combo {
        #[command(subcommand)]
        action: ComboAction,
    },

    /// Manage meaty-move selections
    Meaty {
        #[command(subcommand)]
        action: MeatyAction,
    },

    /// Find moves that fill a frame count
    Adjust {
        character: String,

        /// Frames left to fill
        #[arg(short, long, allow_negative_numbers = true)]
        required: i32,

        #[arg(short, long, default_value_t = 0)]
        tolerance: u32,

        /// at-or-after | at-or-before
        #[arg(short, long, default_value_t = FillPolicy::AtOrAfter)]
        policy: FillPolicy,
    },

    /// Build the okizeme adjustment board for every registered combo
    Board {
        character: String,

        /// First free-slot move (defaults to the fastest option)
        #[arg(long)]
        slot1: Option<String>,

        /// Second free-slot move (defaults to the second option)
        #[arg(long)]
        slot2: Option<String>,

        #[arg(short, long, value_enum, default_value_t = BoardFormat::Text)]
        format: BoardFormat,
    },

    /// Import `<Character>.tsv` frame sheets into the catalog
    Import {
        dir: PathBuf,

        /// Rewrite `close`/`air`/`c+d` move names to Japanese notation
        #[arg(long)]
        localize: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ComboAction {
    /// Register a combo
    Add {
        character: String,
        recipe: String,
        /// Frame advantage after the combo
        #[arg(allow_negative_numbers = true)]
        advantage: i32,
    },

    /// Change a combo's recipe or advantage
    Edit {
        id: u64,

        #[arg(long)]
        recipe: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        advantage: Option<i32>,
    },

    /// Delete a combo
    Delete { id: u64 },

    /// List a character's combos, newest first
    List {
        character: String,

        #[arg(long)]
        by_advantage: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MeatyAction {
    /// Register a move with a startup as a meaty option
    Add {
        character: String,
        #[arg(value_name = "MOVE")]
        move_name: String,
    },

    /// Remove one or more meaty moves by name
    Delete {
        character: String,
        #[arg(value_name = "MOVE", required = true)]
        moves: Vec<String>,
    },

    /// List meaty moves, fastest first
    List { character: String },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Tsv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardFormat {
    #[default]
    Text,
    Json,
}
