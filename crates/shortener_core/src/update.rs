use crate::{
    normalize_url, AppState, Effect, Msg, ShortenOutcome, INVALID_URL_MESSAGE,
    SERVICE_UNAVAILABLE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::EnterPressed => {
            if state.input_value().is_empty() {
                Vec::new()
            } else {
                submit(&mut state)
            }
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::ShortenCompleted {
            request_id,
            outcome,
        } => {
            if !state.finish_request(request_id) {
                return (state, Vec::new());
            }
            match outcome {
                ShortenOutcome::Shortened(id) if !id.is_empty() => {
                    let text = state.apply_shortened(&id);
                    vec![Effect::CopyToClipboard { text }]
                }
                ShortenOutcome::Shortened(_) | ShortenOutcome::NoResult => {
                    state.set_error(INVALID_URL_MESSAGE);
                    Vec::new()
                }
                ShortenOutcome::TransportFailed(_) => {
                    state.set_error(SERVICE_UNAVAILABLE_MESSAGE);
                    Vec::new()
                }
            }
        }
        Msg::CopyClicked => match state.reduced_url() {
            "" => Vec::new(),
            url => vec![Effect::CopyToClipboard {
                text: url.to_string(),
            }],
        },
        Msg::OpenClicked => match state.reduced_url() {
            "" => Vec::new(),
            url => vec![Effect::OpenUrl {
                url: url.to_string(),
            }],
        },
    };

    (state, effects)
}

/// Clear the result area, then start a request for the current input.
/// A second submission while one is in flight is dropped.
fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.is_loading() {
        return Vec::new();
    }
    state.clear_values();
    let url = normalize_url(state.input_value());
    let request_id = state.begin_request();
    vec![Effect::RequestShorten { request_id, url }]
}
