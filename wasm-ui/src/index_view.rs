//! Games page: search, student and tag filters over the game grid.

use std::rc::Rc;

use games_gallery::{Catalog, GameFilter, SiteConfig, chip_row, labels};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{ChipRow, GameCard};
use crate::location::clear_query_string;

#[derive(Properties, PartialEq)]
pub struct IndexViewProps {
    pub catalog: Rc<Catalog>,
    pub config: Rc<SiteConfig>,
    /// Student to pre-select; ignored unless it is a known student.
    #[prop_or_default]
    pub preset_student: Option<String>,
}

/// The filterable game grid.
#[function_component(IndexView)]
pub fn index_view(props: &IndexViewProps) -> Html {
    // Option lists come from the full catalog, once.
    let students = use_memo(props.catalog.clone(), |catalog| catalog.student_names());
    let tags = use_memo(props.catalog.clone(), |catalog| catalog.tags());

    let filter = {
        let students = students.clone();
        let preset = props.preset_student.clone();
        use_state(move || {
            let mut filter = GameFilter::new();
            if let Some(student) = preset.filter(|s| students.contains(s)) {
                filter.set_student(&student);
            }
            filter
        })
    };

    let on_search = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.query = target.value();
            filter.set(next);
        })
    };

    let on_student_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.set_student(&target.value());
            filter.set(next);
        })
    };

    // The dropdown and the chip row share one tag state.
    let on_tag_change = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*filter).clone();
            next.set_tag(&target.value());
            filter.set(next);
        })
    };

    let on_chip = {
        let filter = filter.clone();
        Callback::from(move |tag: Option<String>| {
            let mut next = (*filter).clone();
            next.tag = tag;
            filter.set(next);
        })
    };

    let on_clear = {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            clear_query_string();
            filter.set(GameFilter::default());
        })
    };

    // Keep both dropdowns showing the current filter, including after a
    // chip click or Clear.
    let student_select = use_node_ref();
    let tag_select = use_node_ref();
    {
        let student_select = student_select.clone();
        let tag_select = tag_select.clone();
        use_effect_with((*filter).clone(), move |filter| {
            if let Some(select) = student_select.cast::<HtmlSelectElement>() {
                select.set_value(filter.student.as_deref().unwrap_or_default());
            }
            if let Some(select) = tag_select.cast::<HtmlSelectElement>() {
                select.set_value(filter.tag.as_deref().unwrap_or_default());
            }
            || ()
        });
    }

    let shown = filter.apply(&props.catalog);
    let chips = chip_row(&tags, filter.tag.as_deref());

    html! {
        <>
            <div class="toolbar">
                <input
                    id="searchInput"
                    type="search"
                    placeholder={labels::SEARCH_PLACEHOLDER}
                    value={filter.query.clone()}
                    oninput={on_search}
                />
                <select id="studentSelect" ref={student_select} onchange={on_student_change}>
                    <option value="">
                        { labels::ALL_STUDENTS_OPTION }
                    </option>
                    { for students.iter().map(|name| html! {
                        <option value={name.clone()}>
                            { name.as_str() }
                        </option>
                    })}
                </select>
                <select id="tagSelect" ref={tag_select} onchange={on_tag_change}>
                    <option value="">
                        { labels::ALL_TAGS_OPTION }
                    </option>
                    { for tags.iter().map(|tag| html! {
                        <option value={tag.clone()}>
                            { tag.as_str() }
                        </option>
                    })}
                </select>
                <button id="clearBtn" type="button" onclick={on_clear}>{ labels::CLEAR }</button>
            </div>

            <div id="tagChips" class="chips">
                <ChipRow {chips} on_select={on_chip} />
            </div>

            <div class="stats">
                <span id="statTotal">{ labels::total_label(props.catalog.len()) }</span>
                <span id="statShown">{ labels::shown_label(shown.len()) }</span>
            </div>

            <div class="grid">
                { for shown.iter().map(|game| html! {
                    <GameCard game={(*game).clone()} config={props.config.clone()} />
                })}
            </div>

            <div id="emptyState" class="empty" hidden={!shown.is_empty()}>
                <p>{ labels::NO_GAMES }</p>
            </div>
        </>
    }
}
