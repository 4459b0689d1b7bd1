use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="max-w-3xl mx-auto space-y-4">
            <h1 class="text-3xl font-semibold text-gray-900">"Contact"</h1>
            <p class="text-gray-700">"Questions about an order or a product? Reach us at:"</p>
            <ul class="space-y-1 text-gray-700">
                <li>
                    <span class="font-medium">"Email: "</span>
                    <a class="text-teal-700 underline" href="mailto:hello@example.com">
                        "hello@example.com"
                    </a>
                </li>
                <li>
                    <span class="font-medium">"Phone: "</span>
                    "+1 555 0100"
                </li>
            </ul>
        </section>
    }
}
