//! Placeholder post feed fetched once per visit. Ticking a card only changes
//! local state.

use crate::{
    app_lib::HttpClient,
    components::{Alert, AlertKind, Spinner},
    features::posts::{
        client::{list_posts, POSTS_BASE_URL},
        Post, TickedSet,
    },
};
use leptos::prelude::*;

#[component]
pub fn PostsPage() -> impl IntoView {
    let posts = LocalResource::new(|| async move {
        list_posts(&HttpClient::external(POSTS_BASE_URL)).await
    });
    let ticked = RwSignal::new(TickedSet::default());

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-center">"Fetched Data from JSONPlaceholder"</h1>
            <Suspense fallback=move || view! { <Spinner label="Loading data..." /> }>
                {move || match posts.get() {
                    Some(Ok(list)) => {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                <For
                                    each=move || list.clone()
                                    key=|post| post.id
                                    children=move |post| view! { <PostCard post=post ticked=ticked /> }
                                />
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=format!("Error: {}", err.message) /> }
                            .into_any()
                    }
                    None => view! { <Spinner label="Loading data..." /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn PostCard(post: Post, ticked: RwSignal<TickedSet>) -> impl IntoView {
    let id = post.id;
    let is_ticked = move || ticked.with(|set| set.contains(id));

    view! {
        <div
            class="p-6 rounded-lg shadow-md hover:shadow-lg transition-all duration-300"
            class:bg-green-100=is_ticked
            class:bg-white=move || !is_ticked()
        >
            <div class="flex justify-between items-start">
                <h2 class="text-xl font-semibold mb-2 text-violet-700 pr-4">{post.title}</h2>
                <input
                    type="checkbox"
                    prop:checked=is_ticked
                    on:change=move |_| {
                        ticked.update(|set| {
                            set.toggle(id);
                        });
                    }
                />
            </div>
            <p class="text-gray-700 mt-2">{post.body}</p>
        </div>
    }
}
