//! Filtered product grid with loading and empty states.

use dioxus::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::translations::t;
use crate::pages::catalog_page::CatalogController;


#[component]
pub fn ProductGrid() -> Element {
    let controller = use_context::<CatalogController>();
    let lang = *controller.lang.read();
    let products = controller.filtered_products.read().clone();

    if *controller.is_loading.read() {
        return rsx! {
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    padding: 60px 0;
                ",
                LoadingIndicator {}
            }
        };
    }

    // An empty result is a normal outcome, both for "nothing matched" and
    // for "no data loaded".
    if products.is_empty() {
        return rsx! {
            div {
                id: "x-catalog-empty-state",
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    padding: 60px 20px;
                    color: #6B7280;
                    font-size: 20px;
                    text-align: center;
                ",
                {t(lang, "noResults")}
            }
        };
    }

    rsx! {
        div {
            id: "x-catalog-product-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 16px;
                padding: 16px;
            ",
            for product in products {
                ProductCard { key: "{product.object_id}", product }
            }
        }
    }
}
