use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto space-y-4">
            <h1 class="text-3xl font-semibold text-gray-900">"About"</h1>
            <p class="text-gray-700">
                "We are a small team selling gear for people who like to spend their weekends outside."
            </p>
            <p class="text-gray-700">
                "This site is a single-page application: every page is rendered in your browser and talks to our API directly."
            </p>
        </section>
    }
}
