/// Read-only snapshot of [`crate::AppState`] handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input_value: String,
    pub reduced_url: String,
    /// Loader visibility.
    pub loading: bool,
    /// Result area visibility.
    pub show_result: bool,
    pub url_error: String,
    /// Copy/open buttons are only offered once a result URL exists.
    pub result_actions_visible: bool,
}
