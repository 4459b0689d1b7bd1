//! Minimalistic 404 page for unknown routes and missing records.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top-level route fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <NotFoundContent /> }
}

/// 404 body, also used by detail pages whose record does not exist.
#[component]
pub fn NotFoundContent(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] message: Option<&'static str>,
) -> impl IntoView {
    let title = title.unwrap_or("Page not found");
    let message = message.unwrap_or("The page you requested does not exist.");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <div class="relative">
                <h1 class="text-9xl font-black text-gray-100 select-none">"404"</h1>
                <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-gray-900 whitespace-nowrap">
                    {title}
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="text-gray-500 max-w-sm mx-auto">{message}</p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-teal-600 rounded-lg hover:bg-teal-700 focus:ring-4 focus:outline-none focus:ring-teal-300 transition-all"
                    >
                        "Go Home"
                    </A>
                    <button
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                                let _ = history.back();
                            }
                        }
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-teal-700 focus:z-10 focus:ring-4 focus:ring-gray-100 transition-all"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
