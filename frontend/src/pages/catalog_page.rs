//! The catalog page: owns the dataset snapshot and coordinates filter
//! state, URL and rendered results.

use dioxus::{logger::tracing, prelude::*};

use common::dataset_store::{DatasetStore, FetchError};
use common::filter_state::{DEFAULT_PRICE_MIN, FilterState};
use common::product::Product;
use common::{facets, filter_engine};

use crate::api::catalog_api::fetch_catalog;
use crate::components::filter_panel::FilterPanel;
use crate::components::header::CatalogHeader;
use crate::components::product_grid::ProductGrid;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::translations::Lang;
use crate::data_definitions::url_query::CatalogUrlQuery;
use crate::routes::Route;

/// Everything the presentation components need: current state, derived
/// results and facet options as read signals, plus one callback per
/// mutation entry point. Each callback re-serializes the new state into
/// the URL with a replacing navigation, so the route stays the single
/// source of truth and keystrokes never pile up in browser history.
#[derive(Clone, Copy)]
pub struct CatalogController {
    pub lang: Signal<Lang>,
    pub search_query: ReadSignal<String>,
    pub filters: ReadSignal<FilterState>,
    pub is_loading: ReadSignal<bool>,
    pub filtered_products: ReadSignal<Vec<Product>>,
    pub top_categories: ReadSignal<Vec<String>>,
    pub sub_categories: ReadSignal<Vec<String>>,
    pub brands: ReadSignal<Vec<String>>,
    pub set_search_query: Callback<String>,
    pub select_category: Callback<(String, Option<String>)>,
    pub set_brand: Callback<String>,
    pub set_price_max: Callback<u32>,
    pub toggle_free_shipping: Callback<()>,
    pub set_rating: Callback<u8>,
    pub clear_filters: Callback<()>,
}

#[component]
pub fn CatalogPage(catalog_query: ReadSignal<CatalogUrlQuery>) -> Element {
    let lang = use_signal(Lang::default);
    let search_query = use_memo(move || catalog_query.read().search_query.clone());
    let filters = use_memo(move || catalog_query.read().filters.clone());

    // The one suspension point: the dataset fetch. Completions go through
    // the store's token guard, so a stale response can never overwrite a
    // newer snapshot.
    let mut dataset = use_signal(DatasetStore::default);
    let loader = use_resource(move || async move {
        let token = dataset.write().begin_load();
        let loaded = fetch_catalog()
            .await
            .map_err(|e| FetchError::Request(e.to_string()));
        if let Err(err) = &loaded {
            tracing::error!("catalog load failed: {err}");
        }
        dataset.write().complete_load(token, loaded);
    });
    let is_loading = use_memo(move || loader.read().is_none());

    let filtered_products = use_memo(move || {
        filter_engine::apply(dataset.read().products(), &filters.read(), &search_query.read())
    });
    let top_categories = use_memo(move || facets::top_level_categories(dataset.read().products()));
    let sub_categories = use_memo(move || {
        let selected = filters.read().category_lvl0.clone();
        if selected.is_empty() {
            Vec::new()
        } else {
            facets::sub_categories(dataset.read().products(), &selected)
        }
    });
    // The brand list is deliberately dataset-wide, not narrowed by the
    // other active filters.
    let brands = use_memo(move || facets::brands(dataset.read().products()));

    let replace_query = Callback::new(move |next: CatalogUrlQuery| {
        navigator().replace(Route::CatalogPage { catalog_query: next });
    });
    let set_search_query = Callback::new(move |value: String| {
        let mut next = catalog_query.read().clone();
        next.search_query = value;
        replace_query(next);
    });
    let select_category = Callback::new(move |(lvl0, lvl1): (String, Option<String>)| {
        let mut next = catalog_query.read().clone();
        next.filters.select_category(lvl0, lvl1);
        replace_query(next);
    });
    let set_brand = Callback::new(move |brand: String| {
        let mut next = catalog_query.read().clone();
        next.filters.set_brand(brand);
        replace_query(next);
    });
    // The slider only moves the upper bound; the lower bound stays at the
    // domain minimum.
    let set_price_max = Callback::new(move |max: u32| {
        let mut next = catalog_query.read().clone();
        next.filters.set_price_range(DEFAULT_PRICE_MIN, max);
        replace_query(next);
    });
    let toggle_free_shipping = Callback::new(move |_: ()| {
        let mut next = catalog_query.read().clone();
        next.filters.toggle_free_shipping();
        replace_query(next);
    });
    let set_rating = Callback::new(move |rating: u8| {
        let mut next = catalog_query.read().clone();
        next.filters.set_rating(rating);
        replace_query(next);
    });
    let clear_filters = Callback::new(move |_: ()| {
        let mut next = catalog_query.read().clone();
        next.filters.clear();
        replace_query(next);
    });

    use_context_provider(move || CatalogController {
        lang,
        search_query: search_query.into(),
        filters: filters.into(),
        is_loading: is_loading.into(),
        filtered_products: filtered_products.into(),
        top_categories: top_categories.into(),
        sub_categories: sub_categories.into(),
        brands: brands.into(),
        set_search_query,
        select_category,
        set_brand,
        set_price_max,
        toggle_free_shipping,
        set_rating,
        clear_filters,
    });

    rsx! {
        Title { "Catalog" }
        div {
            id: "x-catalog-page-root",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",
            CatalogHeader {}

            div {
                id: "x-catalog-body",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-start;
                    width: 100%;
                    flex-grow: 1;
                ",
                div {
                    id: "x-catalog-filter-column",
                    style: "
                        width: 300px;
                        flex-shrink: 0;
                        border-right: 1px solid #E5E7EB;
                        min-height: 100%;
                    ",
                    FilterPanel {}
                }
                div {
                    id: "x-catalog-results-column",
                    style: "
                        flex-grow: 1;
                        min-width: 0;
                    ",
                    SuspendWrapper { ProductGrid {} }
                }
            }
        }
    }
}
