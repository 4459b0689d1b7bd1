use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto space-y-6 text-center">
            <h1 class="text-4xl font-bold text-gray-900">"Welcome to the Storefront"</h1>
            <p class="text-lg text-gray-600">
                "Browse the catalog, manage users, or explore a couple of public APIs."
            </p>
            <div class="flex flex-wrap justify-center gap-4">
                <A
                    href=paths::PRODUCTS
                    {..}
                    class="rounded-lg bg-teal-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-teal-700"
                >
                    "Shop products"
                </A>
                <A
                    href=paths::USERS
                    {..}
                    class="rounded-lg border border-teal-600 px-5 py-2.5 text-sm font-medium text-teal-700 hover:bg-teal-50"
                >
                    "Manage users"
                </A>
            </div>
        </section>
    }
}
