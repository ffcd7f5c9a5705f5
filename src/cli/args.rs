//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Self-balancing AVL tree served over a JSON HTTP API with a browser visualizer
#[derive(Parser, Debug)]
#[command(name = "avlviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (honors PORT for cloud deployments)
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Directory holding the web UI assets
    #[arg(short, long, default_value = "static", value_hint = ValueHint::DirPath)]
    pub static_dir: PathBuf,

    /// Enable debug logging (can be repeated: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
