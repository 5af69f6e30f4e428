use shortener_core::AppViewModel;

use super::constants::{LOADER_TEXT, RESULT_ACTIONS_HINT};

/// Lines to print for the transition `prev` -> `next`.
///
/// The terminal only shows what changed: the loader when a request starts,
/// and the result area once it becomes visible.
pub fn render_changes(prev: &AppViewModel, next: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if next.loading && !prev.loading {
        lines.push(LOADER_TEXT.to_string());
    }

    let result_changed = next.show_result
        && (!prev.show_result
            || prev.url_error != next.url_error
            || prev.reduced_url != next.reduced_url);
    if result_changed {
        if !next.url_error.is_empty() {
            lines.push(format!("error: {}", next.url_error));
        }
        if next.result_actions_visible {
            lines.push(format!("{}  {RESULT_ACTIONS_HINT}", next.reduced_url));
        }
    }

    lines
}
