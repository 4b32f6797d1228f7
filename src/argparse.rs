use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

pub fn parse() -> Cli {
    Cli::parse()
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn console debugging information on
    #[arg(short, long)]
    pub console: bool,

    /// Log to a file
    #[arg(short, long, value_name = "FILE", default_value = "tempest.log")]
    pub log_file: PathBuf,

    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Listen for Tempest UDP broadcasts
    Listen {
        /// UDP port (defaults to TEMPEST_PORT or 50222)
        #[arg(short, long)]
        port: Option<u16>,

        /// Also append decoded lines to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Don't print decoded lines on standard output
        #[arg(short, long)]
        quiet: bool,

        /// Emit the station summary after every decoded message
        #[arg(short, long)]
        summary: bool,
    },

    /// Decode captured datagrams, one JSON message per line
    Replay {
        /// Capture file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Source address to report for every message
        #[arg(long, default_value = "127.0.0.1")]
        src: IpAddr,

        /// Emit the station summary after every decoded message
        #[arg(short, long)]
        summary: bool,
    },
}
