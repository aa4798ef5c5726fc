//! Dropdown with a search box, bound to one facet of the page session.

use common::facet::Facet;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdArrowDropDown};
use engine::HighlightDirection;

use crate::data_definitions::page_session::PageSession;


#[derive(Debug, Clone, PartialEq)]
struct OptionRow {
    index: usize,
    value: String,
    label: String,
    background: &'static str,
    border_left: &'static str,
}

#[component]
pub fn SearchableDropdown(mut session: Signal<PageSession>, facet: Facet, placeholder: ReadSignal<String>) -> Element {
    let is_open = use_memo(move || session.read().selector(facet).is_open());
    let is_searching = use_memo(move || session.read().selector(facet).is_searching());
    let query_text = use_memo(move || session.read().selector(facet).query_text().to_string());
    let button_label = use_memo(move || {
        let session = session.read();
        let value = session.facet_state().get(facet);
        let label = match facet {
            Facet::Keyword => (!value.is_empty()).then(|| value.to_string()),
            _ => session.selector(facet).selected_label(value).map(str::to_string),
        };
        label.unwrap_or_else(|| placeholder.read().clone())
    });
    let option_rows = use_memo(move || {
        let session = session.read();
        let selector = session.selector(facet);
        let current_value = session.facet_state().get(facet);
        selector
            .resolved_options()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let is_highlighted = selector.highlighted_index() == Some(index);
                let is_current = option.value == current_value;
                OptionRow {
                    index,
                    value: option.value.clone(),
                    label: option.label.clone(),
                    background: if is_highlighted || is_current { "#e9ecef" } else { "white" },
                    border_left: if is_highlighted { "3px solid #0d6efd" } else { "3px solid transparent" },
                }
            })
            .collect::<Vec<_>>()
    });
    let border_color = use_memo(move || if is_open() { "#0d6efd" } else { "#ced4da" });

    let on_query_input = move |event: Event<FormData>| {
        let pending = session.write().set_query_text(facet, event.value());
        if let Some(pending) = pending {
            spawn(async move {
                let completion = pending.resolve().await;
                session.write().complete_search(facet, completion);
            });
        }
    };
    let on_query_keydown = move |event: Event<KeyboardData>| {
        match event.key() {
            Key::ArrowDown => {
                event.prevent_default();
                session.write().move_highlight(facet, HighlightDirection::Down);
            }
            Key::ArrowUp => {
                event.prevent_default();
                session.write().move_highlight(facet, HighlightDirection::Up);
            }
            Key::Enter => {
                event.prevent_default();
                session.write().select_highlighted(facet);
            }
            Key::Escape => {
                event.prevent_default();
                session.write().cancel(facet);
            }
            _ => {}
        }
    };

    rsx! {
        div {
            style: "position: relative; width: 100%; min-width: 200px;",

            // click outside the open menu
            if is_open() {
                div {
                    style: "
                        position: fixed;
                        top: 0px;
                        left: 0px;
                        width: 100vw;
                        height: 100vh;
                        z-index: 99;
                    ",
                    onclick: move |_| session.write().focus_lost(facet),
                }
            }

            button {
                r#type: "button",
                aria_label: "{placeholder}",
                style: "
                    width: 100%;
                    padding: 12px 16px;
                    background-color: white;
                    color: #333;
                    border: 1px solid {border_color()};
                    border-radius: 8px;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 16px;
                    position: relative;
                    z-index: 100;
                ",
                onclick: move |_| session.write().toggle(facet),
                span { "{button_label}" }
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
            }

            if is_open() {
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0px;
                        right: 0px;
                        max-height: 300px;
                        overflow-y: auto;
                        background-color: white;
                        border: 1px solid #ced4da;
                        border-top: none;
                        border-radius: 0 0 8px 8px;
                        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);
                        z-index: 100;
                    ",
                    input {
                        r#type: "text",
                        placeholder: "Rechercher...",
                        autofocus: true,
                        style: "
                            width: 100%;
                            padding: 12px 16px;
                            border: none;
                            border-bottom: 1px solid #ced4da;
                            font-size: 15px;
                            outline: none;
                            box-sizing: border-box;
                        ",
                        value: "{query_text}",
                        oninput: on_query_input,
                        onkeydown: on_query_keydown,
                    }

                    if is_searching() {
                        div { style: "padding: 12px; color: #6c757d; text-align: center;", "Chargement..." }
                    } else if option_rows.read().is_empty() {
                        div { style: "padding: 12px; color: #6c757d; text-align: center;", "Aucun résultat trouvé" }
                    } else {
                        ul {
                            style: "list-style: none; padding: 0px; margin: 0px;",
                            for row in option_rows() {
                                li {
                                    key: "{row.value}",
                                    style: "
                                        padding: 12px 16px;
                                        cursor: pointer;
                                        background-color: {row.background};
                                        border-left: {row.border_left};
                                    ",
                                    onclick: move |_| {
                                        session.write().select(facet, row.index);
                                    },
                                    "{row.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
