//! Shortener engine: IO side of the workflow and effect execution.
mod client;
mod clipboard;
mod types;
mod workflow;

pub use client::{ClientSettings, ReqwestShortenClient, ShortenClient};
pub use clipboard::{ArboardClipboard, Clipboard, ClipboardError, NoClipboard};
pub use types::{
    FailureKind, RequestMethod, ResponseMode, ShortenError, ShortenResponse, DEFAULT_ENDPOINT,
};
pub use workflow::{outcome_from_result, RunReport, Workflow};
