//! Students page: ranking of students by game count with a name search.

use std::rc::Rc;

use games_gallery::{Catalog, SiteConfig, aggregate, filter_students, labels};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::StudentCard;

#[derive(Properties, PartialEq)]
pub struct StudentsViewProps {
    pub catalog: Rc<Catalog>,
    pub config: Rc<SiteConfig>,
}

#[function_component(StudentsView)]
pub fn students_view(props: &StudentsViewProps) -> Html {
    let ranking = use_memo(props.catalog.clone(), |catalog| aggregate(catalog));

    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            query.set(target.value());
        })
    };

    let shown = filter_students(&ranking, &query);

    html! {
        <>
            <div class="toolbar">
                <input
                    id="studentSearch"
                    type="search"
                    placeholder={labels::STUDENT_SEARCH_PLACEHOLDER}
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <span id="studentCount">{ labels::total_label(ranking.len()) }</span>
            </div>

            <div class="grid">
                { for shown.iter().map(|student| html! {
                    <StudentCard student={(*student).clone()} config={props.config.clone()} />
                })}
            </div>

            <div id="studentsEmpty" class="empty" hidden={!shown.is_empty()}>
                <p>{ labels::NO_STUDENTS }</p>
            </div>
        </>
    }
}
