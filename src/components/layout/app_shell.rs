//! Page chrome shared by every route: the store header with its navigation
//! and the build footer.

use crate::{app_lib::build_info::git_commit_hash, routes::paths};
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINKS: [(&str, &str); 7] = [
    (paths::HOME, "Home"),
    (paths::ABOUT, "About"),
    (paths::CONTACT, "Contact"),
    (paths::PRODUCTS, "Products"),
    (paths::POSTS, "Posts"),
    (paths::NASA, "NASA"),
    (paths::USERS, "Users"),
];

const NAV_ID: &str = "storefront-nav";

/// `/` only matches itself; other entries also own their nested pages.
fn is_active(href: &str, pathname: &str) -> bool {
    if href == paths::HOME {
        return pathname == href;
    }
    pathname
        .strip_prefix(href)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (nav_open, set_nav_open) = signal(false);
    let pathname = use_location().pathname;
    let close_nav = move |_| set_nav_open.set(false);

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="bg-teal-500 text-white shadow-md">
                <div class="max-w-screen-xl mx-auto p-4 flex flex-wrap items-center justify-between">
                    <A href=paths::HOME {..} class="text-xl font-bold tracking-tight" on:click=close_nav>
                        "Storefront"
                    </A>
                    <button
                        type="button"
                        class="md:hidden rounded-lg p-2 hover:bg-teal-600 focus:outline-none focus:ring-2 focus:ring-teal-200"
                        aria-controls=NAV_ID
                        aria-expanded=move || nav_open.get().to_string()
                        on:click=move |_| set_nav_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Toggle navigation"</span>
                        <span aria-hidden="true">{move || if nav_open.get() { "✕" } else { "☰" }}</span>
                    </button>
                    <nav id=NAV_ID class="w-full md:w-auto md:block" class:hidden=move || !nav_open.get()>
                        <ul class="flex flex-col gap-1 mt-3 md:mt-0 md:flex-row md:gap-6">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(href, label)| {
                                    let active = move || pathname.with(|current| is_active(href, current));
                                    view! {
                                        <li>
                                            <A
                                                href=href
                                                {..}
                                                class="block rounded px-3 py-2 md:p-0 hover:underline"
                                                class:font-semibold=active
                                                class:underline=active
                                                on:click=close_nav
                                            >
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
            </header>
            <main class="flex-1 container mx-auto p-4 mt-6">{children()}</main>
            <footer class="py-4 text-center text-xs text-gray-500">
                "build " <span class="font-mono">{git_commit_hash()}</span>
            </footer>
        </div>
    }
}

