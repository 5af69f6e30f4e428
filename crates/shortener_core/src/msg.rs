#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User released Enter in the input box. Ignored while the input is empty.
    EnterPressed,
    /// User clicked the submit button.
    SubmitClicked,
    /// The shortening service answered (or failed to) for a request.
    ShortenCompleted {
        request_id: crate::RequestId,
        outcome: ShortenOutcome,
    },
    /// User clicked the result text or the copy button.
    CopyClicked,
    /// User clicked "Open in new tab".
    OpenClicked,
}

/// Result of a shortening request as seen by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// The service returned a usable identifier.
    Shortened(String),
    /// The call completed but carried no usable identifier.
    NoResult,
    /// The call never produced a response payload.
    TransportFailed(String),
}
