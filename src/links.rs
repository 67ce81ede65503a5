//! Links between the games page, the students page and game pages.
//!
//! The `student` query parameter is the only state carried across pages.

use crate::config::{STUDENT_PARAM, SiteConfig};

/// Page of a single game, e.g. `/oyunlar/uzay-kosusu/`.
pub fn game_href(config: &SiteConfig, slug: &str) -> String {
    format!("{}{}/", config.game_path_prefix, slug)
}

/// Games page pre-filtered to `student`.
pub fn games_for_student_href(config: &SiteConfig, student: &str) -> String {
    with_student_param(&config.games_page, student)
}

/// Students page pointed at `student`.
pub fn student_page_href(config: &SiteConfig, student: &str) -> String {
    with_student_param(&config.students_page, student)
}

fn with_student_param(page: &str, student: &str) -> String {
    format!("{page}?{STUDENT_PARAM}={}", urlencoding::encode(student))
}

/// Value of the first `student` parameter in a `location.search` string.
///
/// Accepts the string with or without its leading `?`. `+` decodes to a
/// space and malformed escapes are replaced rather than rejected.
pub fn student_from_query(search: &str) -> Option<String> {
    query_param(search, STUDENT_PARAM)
}

fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_component(k) == key)
        .map(|(_, v)| decode_component(v))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
