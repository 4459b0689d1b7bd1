use crate::{
    features::products::find_product,
    routes::{paths, NotFoundContent},
};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_params_map};

/// Shows one catalog entry; unknown ids render a not-found state.
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product = move || params.with(|params| params.get("id")).and_then(|id| find_product(&id));

    move || match product() {
        Some(product) => view! {
            <div class="max-w-3xl mx-auto space-y-4">
                <A href=paths::PRODUCTS {..} class="text-teal-700 hover:text-teal-800 underline">
                    "Back to Products"
                </A>
                <h1 class="text-3xl font-semibold text-gray-900">{product.name}</h1>
                <p class="text-gray-700">{product.description}</p>
                <p class="text-sm text-gray-500 font-mono">{product.id}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <NotFoundContent
                title="Product not found"
                message="We could not find that product in the catalog."
            />
        }
        .into_any(),
    }
}
