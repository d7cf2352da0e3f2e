use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grouplist")]
#[command(about = "Browse a grouped, collapsible list of records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Read records from this JSON file instead of the bundled data"
    )]
    pub data: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive list (default)")]
    Browse {
        #[command(flatten)]
        expand: ExpandArgs,
    },

    #[command(about = "Print the grouped list once")]
    List {
        #[command(flatten)]
        expand: ExpandArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show the built-in preview data with group 1 expanded")]
    Demo {
        #[arg(long, help = "Print instead of opening the interactive list")]
        print: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExpandArgs {
    #[arg(
        long,
        value_name = "GROUP_ID",
        value_delimiter = ',',
        help = "Groups to expand at startup"
    )]
    pub expand: Vec<i64>,

    #[arg(long, conflicts_with = "expand", help = "Expand every group at startup")]
    pub expand_all: bool,
}
