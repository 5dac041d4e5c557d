//! Hero banner with the free-text search input and language toggle.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::translations::{Lang, t};
use crate::pages::catalog_page::CatalogController;


#[component]
pub fn CatalogHeader() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = controller.lang;
    let current_lang = *lang.read();

    rsx! {
        div {
            id: "x-catalog-header",
            style: "
                width: 100%;
                padding: 40px 40px 64px 40px;
                text-align: center;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                box-sizing: border-box;
            ",
            LangToggle { lang }
            h1 {
                style: "
                    color: white;
                    font-size: 36px;
                    font-weight: 700;
                    margin-bottom: 40px;
                ",
                {t(current_lang, "tagline")}
            }
            SearchBox {}
        }
    }
}

#[component]
fn LangToggle(lang: Signal<Lang>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                justify-content: flex-end;
                gap: 8px;
            ",
            for option in [Lang::En, Lang::Vi] {
                LangButton { lang, option }
            }
        }
    }
}

#[component]
fn LangButton(lang: Signal<Lang>, option: Lang) -> Element {
    let is_active = *lang.read() == option;
    let background = if is_active { "white" } else { "transparent" };
    let color = if is_active { "#2D208A" } else { "white" };
    rsx! {
        button {
            style: "
                border: 1px solid white;
                border-radius: 6px;
                padding: 4px 10px;
                font-size: 13px;
                cursor: pointer;
                background-color: {background};
                color: {color};
            ",
            onclick: move |_| lang.set(option),
            "{option.as_str()}"
        }
    }
}

/// The free-text search input. Every keystroke re-serializes the state
/// into the URL through the controller, so typing while facets change
/// always composes with the latest filter state.
#[component]
fn SearchBox() -> Element {
    let controller = use_context::<CatalogController>();
    let search_query = controller.search_query;
    let set_search_query = controller.set_search_query;
    let lang = controller.lang;

    let search_oninput = move |event: Event<FormData>| {
        set_search_query(event.value());
    };

    rsx! {
        div {
            id: "x-catalog-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 22px;
                height: 44px;
                width: 60%;
                margin: 0 auto;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 22px; height: 22px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: t(*lang.read(), "placeholderSearch"),
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_query.read()}",
                oninput: search_oninput,
            }
        }
    }
}
