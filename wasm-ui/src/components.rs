//! Cards, chips and notices shared by both pages.

use std::rc::Rc;

use games_gallery::{
    Chip, Game, SiteConfig, StudentSummary, game_href, games_for_student_href, labels,
    student_page_href,
};
use yew::prelude::*;

/// Pill class by position; pills alternate between two styles.
fn pill_class(index: usize) -> &'static str {
    if index % 2 == 0 { "pill" } else { "pill alt" }
}

/// Card for one game in the grid.
#[derive(Properties, PartialEq)]
pub struct GameCardProps {
    pub game: Game,
    pub config: Rc<SiteConfig>,
}

#[function_component(GameCard)]
pub fn game_card(props: &GameCardProps) -> Html {
    let game = &props.game;
    let student_href =
        student_page_href(&props.config, game.student_name.as_deref().unwrap_or_default());

    html! {
        <article class="card">
            <div class="cover">
                if let Some(cover) = &game.cover {
                    <img src={cover.clone()} alt={labels::cover_alt(game.title())} />
                }
            </div>
            <div class="card-body">
                <h3 class="title">{ game.title() }</h3>
                <div class="meta">{ game.student_label() }</div>
                <p class="desc">{ game.description_text() }</p>
                <div class="pills">
                    { for game.card_tags().iter().enumerate().map(|(i, tag)| html! {
                        <span class={pill_class(i)}>{ tag.as_str() }</span>
                    })}
                </div>
                <div class="card-actions">
                    if let Some(slug) = &game.slug {
                        <a
                            class="link-btn primary"
                            href={game_href(&props.config, slug)}
                            target="_blank"
                            rel="noopener"
                        >
                            { labels::OPEN_GAME }
                        </a>
                    }
                    <a class="link-btn" href={student_href}>{ labels::OPEN_STUDENT }</a>
                </div>
            </div>
        </article>
    }
}

/// Card for one student in the ranking.
#[derive(Properties, PartialEq)]
pub struct StudentCardProps {
    pub student: StudentSummary,
    pub config: Rc<SiteConfig>,
}

#[function_component(StudentCard)]
pub fn student_card(props: &StudentCardProps) -> Html {
    let student = &props.student;
    html! {
        <article class="card">
            <div class="cover"></div>
            <div class="card-body">
                <h3 class="title">{ student.name.as_str() }</h3>
                <div class="meta">{ labels::game_count_label(student.count()) }</div>
                <div class="card-actions">
                    <a class="link-btn primary" href={games_for_student_href(&props.config, &student.name)}>
                        { labels::VIEW_GAMES }
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Row of mutually exclusive tag chips.
#[derive(Properties, PartialEq)]
pub struct ChipRowProps {
    pub chips: Vec<Chip>,
    /// Emits the chip's tag, `None` for the "all" chip.
    pub on_select: Callback<Option<String>>,
}

#[function_component(ChipRow)]
pub fn chip_row(props: &ChipRowProps) -> Html {
    html! {
        <>
            { for props.chips.iter().map(|chip| {
                let on_click = {
                    let on_select = props.on_select.clone();
                    let value = chip.value.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(value.clone()))
                };
                html! {
                    <button
                        key={chip.select_value().to_string()}
                        class="chip"
                        type="button"
                        data-active={if chip.active { "true" } else { "false" }}
                        onclick={on_click}
                    >
                        { chip.label.as_str() }
                    </button>
                }
            })}
        </>
    }
}

/// Static notice shown in place of a view when the catalog cannot be loaded.
#[derive(Properties, PartialEq)]
pub struct ErrorNoticeProps {
    pub catalog_url: String,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! {
        <div class="empty">
            <h3>{ labels::LOAD_FAILED_TITLE }</h3>
            <p>{ labels::load_failed_hint(&props.catalog_url) }</p>
        </div>
    }
}
