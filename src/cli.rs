//! Command-line Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plan video ideas and the scenes to film
#[derive(Debug, Parser)]
#[command(name = "idea-planner", version, about)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/idea-planner/config.toml)
    #[arg(long, global = true, env = "IDEA_PLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the idea store
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show ideas whose title, description or tags contain this text
    #[arg(long, short, global = true, default_value = "")]
    pub search: String,

    /// Only show ideas in this category
    #[arg(long, short, global = true)]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show ideas
    List,
    /// Create an idea
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma-separated
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long = "in", default_value = "")]
        in_category: String,
    },
    /// Delete an idea by position
    Delete { idea: usize },
    /// Manage the scenes of an idea
    Scene {
        #[command(subcommand)]
        action: SceneCommand,
    },
    /// List the categories in use
    Categories,
    /// Write every idea to a JSON backup
    Export {
        /// Defaults to the configured export file name in the current directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace all ideas with the contents of a JSON backup
    Import { path: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum SceneCommand {
    /// Add a scene to an idea
    Add {
        idea: usize,
        description: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Mark a scene filmed / not filmed
    Toggle { idea: usize, scene: usize },
    /// Delete a scene
    Delete { idea: usize, scene: usize },
}
