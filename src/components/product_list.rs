//! Product List Page
//!
//! Filterable, sortable, paginated product grid. Refetches whenever the
//! shared query config changes; categories load once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AsideFilter, Pagination, ProductCard, SortBar};
use crate::context::AppContext;
use crate::models::{Category, Product};

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (products, set_products) = signal(Vec::<Product>::new());
    let (page_size, set_page_size) = signal(1u32);
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // refetch on any query-config change
    Effect::new(move |_| {
        let config = ctx.query.get();
        spawn_local(async move {
            match api::product::list(&config).await {
                Ok(res) => {
                    set_products.set(res.data.products);
                    set_page_size.set(res.data.pagination.page_size);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[SHOP] product list: {err}").into());
                }
            }
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(res) = api::product::categories().await {
                set_categories.set(res.data);
            }
        });
    });

    view! {
        <div class="product-list-page">
            <AsideFilter categories=categories />
            <div class="product-list-main">
                <SortBar page_size=page_size />
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|product| product.id.clone()
                        children=move |product| view! { <ProductCard product=product /> }
                    />
                </div>
                <Pagination page_size=page_size />
            </div>
        </div>
    }
}
