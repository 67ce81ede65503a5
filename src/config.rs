//! Site-wide paths shared by the loader, the views and the CLI.

/// Path of the catalog document served next to the pages.
pub const CATALOG_PATH: &str = "/data/games.json";
/// Prefix of every game's own page; the slug and a trailing `/` follow.
pub const GAME_PATH_PREFIX: &str = "/oyunlar/";
/// The games (index) page.
pub const GAMES_PAGE: &str = "/";
/// The students page.
pub const STUDENTS_PAGE: &str = "/students/";
/// Query parameter carrying a student name between the two pages.
pub const STUDENT_PARAM: &str = "student";

/// Resolved locations used when building requests and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub catalog_url: String,
    pub game_path_prefix: String,
    pub games_page: String,
    pub students_page: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog_url: CATALOG_PATH.to_string(),
            game_path_prefix: GAME_PATH_PREFIX.to_string(),
            games_page: GAMES_PAGE.to_string(),
            students_page: STUDENTS_PAGE.to_string(),
        }
    }
}
