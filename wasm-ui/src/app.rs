//! Page initialization: load the catalog once and mount whichever views
//! the current page has room for.

use std::rc::Rc;

use games_gallery::{Catalog, LoadError, SiteConfig};
use gloo::console;
use gloo::events::EventListener;
use web_sys::Element;

use crate::components::{ErrorNotice, ErrorNoticeProps};
use crate::index_view::{IndexView, IndexViewProps};
use crate::loader::fetch_catalog;
use crate::location::preset_student;
use crate::students_view::{StudentsView, StudentsViewProps};

/// Host element of the games page view.
pub const GAMES_ROOT_ID: &str = "gamesGrid";
/// Host element of the students page view.
pub const STUDENTS_ROOT_ID: &str = "studentsGrid";

/// Run `start` once the document has been parsed.
pub fn when_ready(start: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        start();
        return;
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| start()).forget();
}

/// Load the catalog and mount both views, or the error notice on failure.
pub async fn start(config: SiteConfig) {
    match fetch_catalog(&config.catalog_url).await {
        Ok(catalog) => {
            console::debug!(format!("catalog loaded: {} games", catalog.len()));
            mount_views(Rc::new(catalog), Rc::new(config));
        }
        Err(e) => show_load_error(&config, &e),
    }
}

/// Mount each view whose host element is on the page.
pub fn mount_views(catalog: Rc<Catalog>, config: Rc<SiteConfig>) {
    mount_index(catalog.clone(), config.clone());
    mount_students(catalog, config);
}

/// Log a failed load and put the error notice in the first host present.
pub fn show_load_error(config: &SiteConfig, error: &LoadError) {
    console::error!("games catalog failed to load:", error.to_string());
    mount_error(config);
}

fn mount_index(catalog: Rc<Catalog>, config: Rc<SiteConfig>) {
    let Some(root) = host(GAMES_ROOT_ID) else {
        return;
    };
    let props = IndexViewProps {
        catalog,
        config,
        preset_student: preset_student(),
    };
    let _app_handle = yew::Renderer::<IndexView>::with_root_and_props(root, props).render();
}

fn mount_students(catalog: Rc<Catalog>, config: Rc<SiteConfig>) {
    let Some(root) = host(STUDENTS_ROOT_ID) else {
        return;
    };
    let props = StudentsViewProps { catalog, config };
    let _app_handle = yew::Renderer::<StudentsView>::with_root_and_props(root, props).render();
}

fn mount_error(config: &SiteConfig) {
    let Some(root) = host(GAMES_ROOT_ID).or_else(|| host(STUDENTS_ROOT_ID)) else {
        return;
    };
    let props = ErrorNoticeProps {
        catalog_url: config.catalog_url.clone(),
    };
    let _app_handle = yew::Renderer::<ErrorNotice>::with_root_and_props(root, props).render();
}

/// Look up a host element and empty it so the view replaces its content.
fn host(id: &str) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(id)?;
    root.set_inner_html("");
    Some(root)
}
