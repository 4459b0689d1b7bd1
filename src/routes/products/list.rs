use crate::{features::products::products, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-semibold text-gray-900">"Products"</h1>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {products()
                    .iter()
                    .map(|product| {
                        view! {
                            <A
                                href=paths::product_detail(product.id)
                                {..}
                                class="block p-6 bg-white rounded-lg border border-gray-200 hover:border-teal-500 transition-colors shadow-sm"
                            >
                                <h2 class="text-lg font-medium text-gray-900">{product.name}</h2>
                                <p class="mt-1 text-sm text-gray-500">{product.description}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
