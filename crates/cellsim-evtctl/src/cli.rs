//! Command-line definition.

use cellsim_events::Channel;
use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Inspect the simulator's event identifier registry.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (missing file means defaults).
    #[arg(
        long,
        value_name = "PATH",
        env = "CELLSIM_CONFIG_PATH",
        default_value = "cellsim.toml"
    )]
    pub config: String,

    /// Output format; overrides `output.format` from the configuration.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every named event.
    List {
        /// Only list events of this channel (e.g. N1, PROFILE-SIMUE).
        #[arg(long, value_parser = parse_channel)]
        channel: Option<Channel>,
    },
    /// Print the display name of each id. An unnamed id is fatal.
    Resolve {
        /// Ids as 0x-prefixed hex or decimal.
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Split ids into channel and ordinal without requiring a name.
    Decode {
        /// Ids as 0x-prefixed hex or decimal.
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },
    /// Find an event by display name or constant name.
    Lookup {
        /// e.g. PDU-SESSION-ESTABLISHMENT-REQUEST-EVENT or PDU_SESS_EST_REQUEST.
        name: String,
    },
    /// Verify the name table and report the number of entries.
    Check,
}

fn parse_channel(value: &str) -> Result<Channel, String> {
    value.parse().map_err(|err: cellsim_events::ParseChannelError| err.to_string())
}
