use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-gray-600 dark:text-gray-300">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-teal-200 border-t-teal-600"
                role="status"
                aria-live="polite"
                aria-label="Loading"
            ></div>
            {label}
        </div>
    }
}
