use std::path::PathBuf;

use clap::Parser;

use crate::platform::logging::LogDestination;

/// Shorten URLs from the terminal.
///
/// Without URL arguments an interactive prompt is started: type a URL and
/// press Enter to shorten it, `:help` lists the other commands.
#[derive(Debug, Parser)]
#[command(name = "shortener", version, about)]
pub struct Args {
    /// RON configuration file; missing file means defaults.
    #[arg(long, default_value = "shortener.ron")]
    pub config: PathBuf,

    /// Page address used as prefix for shortened links.
    #[arg(long)]
    pub page_url: Option<String>,

    /// Shortening service endpoint.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Send `{"originalUrl": ...}` with POST instead of a bodyless GET.
    #[arg(long)]
    pub post: bool,

    /// Use the identifier returned by the service instead of echoing the input.
    #[arg(long)]
    pub service: bool,

    /// Where log output goes.
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// URLs to shorten one after another, then exit.
    pub urls: Vec<String>,
}
