//! Facet filter panel: category tree, brand, price, shipping and rating.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_action_icons::MdSearch,
        md_content_icons::MdClear,
        md_navigation_icons::{MdArrowDropDown, MdChevronRight},
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdStar},
    },
};

use common::filter_state::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, MAX_RATING};

use crate::data_definitions::translations::t;
use crate::pages::catalog_page::CatalogController;


#[component]
pub fn FilterPanel() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let clear_filters = controller.clear_filters;

    rsx! {
        div {
            id: "x-catalog-filter-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 28px;
                padding: 24px;
            ",
            // Panel heading with the clear-filters control.
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                ",
                h2 {
                    style: "font-size: 24px; font-weight: 600; margin: 0;",
                    {t(lang, "filter")}
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: none;
                        background: none;
                        cursor: pointer;
                        color: #6B7280;
                        font-size: 14px;
                    ",
                    onclick: move |_| clear_filters(()),
                    Icon { icon: MdClear, style: "width: 16px; height: 16px;" }
                    {t(lang, "clear")}
                }
            }

            CategoryFilter {}
            BrandFilter {}
            PriceFilter {}
            FreeShippingFilter {}
            RatingFilter {}
        }
    }
}

#[component]
fn FilterSectionTitle(title: String) -> Element {
    rsx! {
        h3 {
            style: "font-size: 17px; font-weight: 600; margin: 0 0 10px 0;",
            "{title}"
        }
    }
}

/// Two-level category tree. The sub-category list opens under the
/// selected parent; selecting a parent clears any sub-category choice.
#[component]
fn CategoryFilter() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let top_categories = controller.top_categories.read().clone();

    rsx! {
        div {
            FilterSectionTitle { title: t(lang, "category").to_string() }
            ul {
                style: "list-style: none; margin: 0; padding: 0 0 0 6px;",
                for category in top_categories {
                    li {
                        key: "{category}",
                        ParentCategoryRow { category }
                    }
                }
            }
        }
    }
}

#[component]
fn ParentCategoryRow(category: ReadSignal<String>) -> Element {
    let controller = use_context::<CatalogController>();
    let select_category = controller.select_category;
    let filters = controller.filters;

    let is_selected = use_memo(move || filters.read().category_lvl0 == *category.read());
    let font_weight = if is_selected() { "700" } else { "400" };

    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: none;
                background: none;
                cursor: pointer;
                font-size: 16px;
                font-weight: {font_weight};
                padding: 4px 0;
            ",
            onclick: move |_| select_category((category.read().clone(), None)),
            if is_selected() {
                Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
            } else {
                Icon { icon: MdChevronRight, style: "width: 20px; height: 20px;" }
            }
            "{category}"
        }
        if is_selected() {
            SubCategoryList { parent: category.read().clone() }
        }
    }
}

#[component]
fn SubCategoryList(parent: ReadSignal<String>) -> Element {
    let controller = use_context::<CatalogController>();
    let select_category = controller.select_category;
    let filters = controller.filters;
    let sub_categories = controller.sub_categories.read().clone();

    rsx! {
        ul {
            style: "list-style: none; margin: 0; padding: 0 0 0 24px;",
            for sub in sub_categories {
                li {
                    key: "{sub}",
                    SubCategoryRow {
                        sub: sub.clone(),
                        is_selected: filters.read().category_lvl1 == sub,
                        onselect: move |sub: String| {
                            select_category((parent.read().clone(), Some(sub)));
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn SubCategoryRow(sub: ReadSignal<String>, is_selected: bool, onselect: Callback<String>) -> Element {
    let font_weight = if is_selected { "700" } else { "400" };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: none;
                background: none;
                cursor: pointer;
                font-size: 15px;
                font-weight: {font_weight};
                padding: 3px 0;
            ",
            onclick: move |_| onselect(sub.read().clone()),
            Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
            "{sub}"
        }
    }
}

/// Brand facet: a text input that filters directly plus the dataset-wide
/// brand list (deliberately not narrowed by the other active filters).
#[component]
fn BrandFilter() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let set_brand = controller.set_brand;
    let filters = controller.filters;
    let brands = controller.brands.read().clone();
    let selected_brand = filters.read().brand.to_lowercase();

    rsx! {
        div {
            FilterSectionTitle { title: t(lang, "brand").to_string() }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    border: 1px solid #D1D5DB;
                    border-radius: 8px;
                    padding: 6px 10px;
                    margin-bottom: 8px;
                ",
                Icon { icon: MdSearch, style: "width: 16px; height: 16px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: t(lang, "placeholderBrand"),
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        font-size: 14px;
                    ",
                    value: "{filters.read().brand}",
                    oninput: move |event| set_brand(event.value()),
                }
            }
            ul {
                style: "list-style: none; margin: 0; padding: 0 0 0 6px;",
                for brand in brands {
                    li {
                        key: "{brand}",
                        BrandRow {
                            is_selected: brand.to_lowercase() == selected_brand,
                            brand,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BrandRow(brand: ReadSignal<String>, is_selected: bool) -> Element {
    let controller = use_context::<CatalogController>();
    let set_brand = controller.set_brand;
    let font_weight = if is_selected { "700" } else { "400" };
    rsx! {
        button {
            style: "
                border: none;
                background: none;
                cursor: pointer;
                font-size: 15px;
                font-weight: {font_weight};
                padding: 3px 0;
            ",
            onclick: move |_| set_brand(brand.read().clone()),
            "{brand}"
        }
    }
}

/// Price range slider. Only the upper bound moves; the lower bound stays
/// at the domain minimum.
#[component]
fn PriceFilter() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let set_price_max = controller.set_price_max;
    let filters = controller.filters;
    let (price_min, price_max) = filters.read().price_range;

    rsx! {
        div {
            FilterSectionTitle { title: t(lang, "price").to_string() }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    justify-content: space-between;
                    font-size: 14px;
                    margin-bottom: 8px;
                ",
                span {
                    span { style: "color: #EAB308; margin-right: 4px;", "$" }
                    "{price_min}"
                }
                span {
                    span { style: "color: #EAB308; margin-right: 4px;", "$" }
                    "{price_max}"
                }
            }
            input {
                r#type: "range",
                min: "{DEFAULT_PRICE_MIN}",
                max: "{DEFAULT_PRICE_MAX}",
                value: "{price_max}",
                style: "width: 100%;",
                oninput: move |event| {
                    set_price_max(event.value().parse().unwrap_or(DEFAULT_PRICE_MAX));
                },
            }
        }
    }
}

#[component]
fn FreeShippingFilter() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let toggle_free_shipping = controller.toggle_free_shipping;
    let filters = controller.filters;
    let is_on = filters.read().free_shipping;
    let state_label = if is_on { t(lang, "yes") } else { t(lang, "no") };

    rsx! {
        div {
            FilterSectionTitle { title: t(lang, "freeShipping").to_string() }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    cursor: pointer;
                    padding-left: 6px;
                ",
                onclick: move |_| toggle_free_shipping(()),
                if is_on {
                    Icon { icon: MdCheckBox, style: "width: 24px; height: 24px; color: #EAB308;" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 24px; height: 24px; color: #6B7280;" }
                }
                span { style: "font-size: 15px;", {t(lang, "display")} }
                span { style: "font-size: 15px; font-weight: 600;", "{state_label}" }
            }
        }
    }
}

/// Minimum-rating rows, five stars down to one. Selecting a row keeps
/// products rated at least that high.
#[component]
fn RatingFilter() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();

    rsx! {
        div {
            FilterSectionTitle { title: t(lang, "rating").to_string() }
            ul {
                style: "list-style: none; margin: 0; padding: 0 0 0 6px;",
                for stars in (1..=MAX_RATING).rev() {
                    li {
                        key: "{stars}",
                        RatingRow { stars }
                    }
                }
            }
        }
    }
}

#[component]
fn RatingRow(stars: u8) -> Element {
    let controller = use_context::<CatalogController>();
    let set_rating = controller.set_rating;
    let filters = controller.filters;
    let is_selected = filters.read().rating == stars;
    let opacity = if is_selected { "1.0" } else { "0.55" };

    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                border: none;
                background: none;
                cursor: pointer;
                padding: 4px 0;
                opacity: {opacity};
            ",
            onclick: move |_| set_rating(stars),
            for star in 0..stars {
                Icon {
                    key: "{star}",
                    icon: MdStar,
                    style: "width: 22px; height: 22px; color: #EAB308;",
                }
            }
        }
    }
}
