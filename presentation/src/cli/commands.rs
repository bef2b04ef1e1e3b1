//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default local data document.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Default template document.
pub const DEFAULT_TEMPLATE_PATH: &str = "template_file.lua";

/// CLI arguments for luagen
#[derive(Parser, Debug)]
#[command(name = "luagen")]
#[command(author, version, about = "Generate Lua module files from Bundlecore tool metadata")]
#[command(long_about = r#"
luagen fills a Lua template with tool metadata, producing one module file
per version record.

Metadata comes either from a local JSON document or from the Bundlecore
registry API. Remote commands read a bearer credential from the
BCORE_AUTH_TOKEN environment variable.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./luagen.toml       Project-level config
3. <config dir>/luagen/config.toml   Global config

Example:
  luagen local
  luagen fetch samtools 1.19 biotools
  luagen fetch-all samtools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the console report
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

/// Where the metadata comes from and which records to generate for
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one file per tag from a local JSON document
    Local {
        /// Path to the JSON data document
        #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Path to the Lua template
        #[arg(long, value_name = "PATH", default_value = DEFAULT_TEMPLATE_PATH)]
        template: PathBuf,
    },

    /// Generate one file for a single version from the registry
    Fetch {
        /// Tool name in the registry
        tool_name: String,

        /// Version to generate for
        tool_version: String,

        /// Domain directory the output is nested under
        tool_domain: String,

        /// Path to the Lua template
        #[arg(long, value_name = "PATH", default_value = DEFAULT_TEMPLATE_PATH)]
        template: PathBuf,
    },

    /// Generate one file per version from the registry
    FetchAll {
        /// Tool name in the registry
        tool_name: String,

        /// Path to the Lua template
        #[arg(long, value_name = "PATH", default_value = DEFAULT_TEMPLATE_PATH)]
        template: PathBuf,
    },
}
