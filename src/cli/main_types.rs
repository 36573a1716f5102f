use crate::display::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "banner-cli")]
#[command(about = "Render bordered ASCII section banners for source code headings")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Display width of borders and title fields
    #[arg(short, long, global = true, env = "BANNER_WIDTH")]
    pub width: Option<usize>,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Add a blank line after each minor banner
    #[arg(long, global = true)]
    pub spaced: bool,

    /// Center titles by terminal display columns instead of characters
    #[arg(long, global = true)]
    pub display_columns: bool,

    /// Renders the built-in sample titles when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render double-bordered banners
    Major {
        /// Titles, rendered in order
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Render single-bordered banners
    Minor {
        /// Titles, rendered in order
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Render a TOML title file with `major` and `minor` arrays
    File {
        /// Path to the title file
        path: String,
    },
    /// Render the built-in sample titles
    Sample,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Print a single configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
