//! Access to the current page URL.

use games_gallery::student_from_query;
use gloo::console;

/// The `location.search` string, empty when unavailable.
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// The `student` parameter of the current URL.
pub fn preset_student() -> Option<String> {
    student_from_query(&current_search()).filter(|s| !s.is_empty())
}

/// Drop the query string from the address bar without reloading.
pub fn clear_query_string() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if location.search().map(|s| s.is_empty()).unwrap_or(true) {
        return;
    }
    let Ok(path) = location.pathname() else {
        return;
    };
    let replaced = window.history().and_then(|history| {
        history.replace_state_with_url(&js_sys::Object::new(), "", Some(&path))
    });
    if let Err(e) = replaced {
        console::warn!("could not clear query string", e);
    }
}
