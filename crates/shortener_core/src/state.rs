use crate::view_model::AppViewModel;
use crate::PageAddress;

pub type RequestId = u64;

/// Shown when the service answered without a usable identifier.
pub const INVALID_URL_MESSAGE: &str = "Invalid url...";
/// Shown when the service could not be reached or answered garbage.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    page: PageAddress,
    input_value: String,
    reduced_url: String,
    loading: bool,
    show_result: bool,
    url_error: String,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new(page: PageAddress) -> Self {
        Self {
            page,
            input_value: String::new(),
            reduced_url: String::new(),
            loading: false,
            show_result: false,
            url_error: String::new(),
            in_flight: None,
            next_request_id: 1,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input_value: self.input_value.clone(),
            reduced_url: self.reduced_url.clone(),
            loading: self.loading,
            show_result: self.show_result,
            url_error: self.url_error.clone(),
            result_actions_visible: !self.reduced_url.is_empty(),
        }
    }

    pub fn page(&self) -> &PageAddress {
        &self.page
    }

    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    pub fn reduced_url(&self) -> &str {
        &self.reduced_url
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, value: String) {
        if self.input_value != value {
            self.input_value = value;
            self.mark_dirty();
        }
    }

    /// Resets the result area ahead of a new submission.
    pub(crate) fn clear_values(&mut self) {
        self.reduced_url.clear();
        self.show_result = false;
        self.url_error.clear();
        self.mark_dirty();
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.loading = true;
        self.mark_dirty();
        request_id
    }

    /// Closes the loading bracket for `request_id`. Returns false for a stale id.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        self.show_result = true;
        self.mark_dirty();
        true
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.url_error = message.to_string();
        self.mark_dirty();
    }

    /// Stores the composed result URL and clears the input. Returns the result.
    pub(crate) fn apply_shortened(&mut self, id: &str) -> String {
        self.input_value.clear();
        self.reduced_url = self.page.compose(id);
        self.mark_dirty();
        self.reduced_url.clone()
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
