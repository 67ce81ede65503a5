//! # games-gallery
//!
//! Catalog handling for a static gallery of student-made games.
//!
//! The site is two pages fed by one JSON document: a searchable grid of
//! games and a ranking of students by game count. This crate holds every
//! platform-independent piece of that pipeline; the `wasm-ui` crate only
//! fetches, renders and wires events.
//!
//! ## Overview
//!
//! - **Catalog**: lenient loading of the `games.json` array
//! - **Filtering**: free-text, student and tag conditions, combined with AND
//! - **Ordering**: Turkish collation for dropdowns, chips and rankings
//! - **Students**: per-student aggregation ranked by game count
//! - **Links**: game pages and the `student` query parameter
//!
//! ## Example
//!
//! ```
//! use games_gallery::{GameFilter, aggregate, parse_catalog};
//!
//! let catalog = parse_catalog(r#"[
//!     {"gameName": "Uzay Koşusu", "studentName": "Ada", "tags": ["platform"]},
//!     {"gameName": "Labirent", "studentName": "Beth", "tags": ["bulmaca"]},
//!     {"gameName": "Kale", "studentName": "Ada", "tags": ["strateji"]}
//! ]"#).unwrap();
//!
//! let shown = GameFilter::new().with_student("Ada").apply(&catalog);
//! assert_eq!(shown.len(), 2);
//!
//! let ranking = aggregate(&catalog);
//! assert_eq!(ranking[0].name, "Ada");
//! assert_eq!(ranking[0].count(), 2);
//! ```

pub mod catalog;
pub mod chips;
pub mod config;
pub mod error;
pub mod filter;
pub mod labels;
pub mod links;
pub mod students;
pub mod text;

pub use catalog::{
    CARD_TAG_LIMIT, Catalog, Game, NO_DESCRIPTION, UNNAMED_STUDENT, UNTITLED_GAME,
    load_catalog_file, parse_catalog,
};
pub use chips::{Chip, chip_row};
pub use config::{STUDENT_PARAM, SiteConfig};
pub use error::LoadError;
pub use filter::GameFilter;
pub use links::{game_href, games_for_student_href, student_from_query, student_page_href};
pub use students::{StudentSummary, aggregate, filter_students};
pub use text::{compare_tr, distinct_sorted, normalize};
