//! Single product card with highlighted text fields.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::MdStar};

use common::product::Product;
use common::text_highlight::{HighlightTextSpan, highlight_term};

use crate::data_definitions::translations::t;
use crate::pages::catalog_page::CatalogController;


#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let term = controller.search_query.read().clone();
    let product = product.read().clone();

    // Highlighting only decorates fields of products that already passed
    // the filter pass; it never feeds back into filtering.
    let name_spans = highlight_term(&product.name, &term);
    let description_spans = highlight_term(&product.description, &term);
    let category_spans: Vec<Vec<HighlightTextSpan>> = product
        .categories
        .iter()
        .map(|category| highlight_term(category, &term))
        .collect();
    let category_count = category_spans.len();
    let price_text = format!("{:.2}", product.price);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 24px;
                background: white;
            ",
            a {
                href: "{product.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                img {
                    src: "{product.image}",
                    alt: "{product.name}",
                    style: "height: 112px; margin: 0 auto 24px auto; display: block;",
                }
            }
            p {
                style: "
                    font-size: 14px;
                    font-weight: 600;
                    color: #6B7280;
                    margin: 0;
                ",
                for (i, spans) in category_spans.into_iter().enumerate() {
                    span {
                        key: "{i}",
                        {render_highlight_text_spans(spans)}
                        if i < category_count - 1 { ", " }
                    }
                }
            }
            h3 {
                style: "font-size: 18px; font-weight: 600; color: black; margin: 0;",
                {render_highlight_text_spans(name_spans)}
            }
            p {
                title: "{product.description}",
                style: "
                    font-size: 13px;
                    color: #374151;
                    margin: 4px 0;
                    overflow: hidden;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                ",
                {render_highlight_text_spans(description_spans)}
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding-top: 8px;
                ",
                span { style: "color: #EAB308; font-size: 17px;", "$" }
                span { style: "font-weight: 600; font-size: 18px;", "{price_text}" }
                span {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 2px;
                        font-size: 13px;
                        border: 2px solid #EAB308;
                        border-radius: 4px;
                        padding: 0 4px;
                    ",
                    Icon { icon: MdStar, style: "width: 14px; height: 14px; color: #EAB308;" }
                    "{product.rating}"
                }
            }
            if product.free_shipping {
                p {
                    style: "color: #22C55E; font-size: 13px; margin: 0;",
                    {t(lang, "freeShipping")}
                }
            }
        }
    }
}

fn render_highlight_text_spans(spans: Vec<HighlightTextSpan>) -> Element {
    let spans = spans.into_iter().map(|span| {
        let background = if span.is_highlighted { "#FDE04766" } else { "transparent" };
        rsx! {
            span {
                style: "background-color: {background};",
                "{span.text}"
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
