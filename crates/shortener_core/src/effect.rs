use crate::RequestId;

/// Side effects requested by [`crate::update`]; executed by the workflow runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the normalized URL to the shortening service.
    RequestShorten { request_id: RequestId, url: String },
    CopyToClipboard { text: String },
    OpenUrl { url: String },
}
