//! NASA image search with per-result drill-down. The whole view renders from a
//! single [`NasaState`]; searches are scoped so a superseded or unmounted
//! request never writes back.

use crate::{
    app_lib::{
        fetch::{RequestScope, Ticket},
        HttpClient,
    },
    features::nasa::{
        client::{self, NASA_IMAGES_BASE_URL},
        AssetDetails, DetailState, NasaState, SearchItem,
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

fn nasa_client() -> HttpClient {
    HttpClient::external(NASA_IMAGES_BASE_URL)
}

fn is_current(scope: StoredValue<RequestScope>, ticket: Ticket) -> bool {
    scope
        .try_with_value(|scope| scope.is_current(ticket))
        .unwrap_or(false)
}

#[component]
pub fn NasaPage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let state = RwSignal::new(NasaState::default());
    let scope = StoredValue::new(RequestScope::new());
    // Issues one ticket per detail load; several loads may be in flight at once.
    let detail_tickets = StoredValue::new(RequestScope::new());
    on_cleanup(move || {
        scope.try_with_value(RequestScope::close);
        detail_tickets.try_with_value(RequestScope::close);
    });

    let on_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = query.get_untracked();
        if query.trim().is_empty() {
            return;
        }
        let Some(ticket) = scope.try_with_value(RequestScope::begin) else {
            return;
        };
        state.update(NasaState::begin_search);

        spawn_local(async move {
            let result = client::search(&nasa_client(), &query).await;
            if is_current(scope, ticket) {
                state.try_update(|state| state.finish_search(result));
            }
        });
    };

    let load_details = Callback::new(move |nasa_id: String| {
        let Some(ticket) = detail_tickets.try_with_value(RequestScope::begin) else {
            return;
        };
        let started = state
            .try_update(|state| state.begin_details(&nasa_id, ticket))
            .unwrap_or(false);
        if !started {
            return;
        }
        spawn_local(async move {
            let result = client::load_details(&nasa_client(), &nasa_id).await;
            let open = detail_tickets
                .try_with_value(|tickets| !tickets.is_closed())
                .unwrap_or(false);
            let stored = open
                && state
                    .try_update(|state| state.finish_details(&nasa_id, ticket, result))
                    .unwrap_or(false);
            if !stored {
                tracing::debug!(nasa_id = %nasa_id, "discarding superseded asset details");
            }
        });
    });

    let items = Memo::new(move |_| state.with(|state| state.items().to_vec()));

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold text-center">"NASA Images API Search"</h1>

            <form on:submit=on_search class="flex gap-2 justify-center">
                <input
                    type="text"
                    class="border rounded px-3 py-2 w-full max-w-md"
                    placeholder="Search NASA media (e.g., moon, mars, apollo)"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="bg-teal-600 text-white px-4 py-2 rounded">
                    "Search"
                </button>
            </form>

            {move || {
                state.with(|state| {
                    if state.is_searching() {
                        Some(view! { <div class="text-center">"Loading…"</div> }.into_any())
                    } else if let Some(err) = state.error() {
                        Some(view! { <div class="text-center text-red-600">{err.message.clone()}</div> }.into_any())
                    } else if state.is_empty() {
                        Some(view! { <div class="text-center text-gray-600">"Try a search to see results."</div> }.into_any())
                    } else {
                        None
                    }
                })
            }}

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| {
                            view! { <ResultCard item=item state=state load_details=load_details /> }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ResultCard(
    item: SearchItem,
    state: RwSignal<NasaState>,
    load_details: Callback<String>,
) -> impl IntoView {
    let nasa_id = item.nasa_id.clone();
    let detail = {
        let nasa_id = nasa_id.clone();
        move || {
            nasa_id
                .as_deref()
                .and_then(|id| state.with(|state| state.detail(id).cloned()))
        }
    };
    let loading = {
        let nasa_id = nasa_id.clone();
        move || {
            nasa_id
                .as_deref()
                .is_some_and(|id| state.with(|state| state.is_detail_loading(id)))
        }
    };
    let disabled = {
        let loading = loading.clone();
        let missing_id = nasa_id.is_none();
        move || missing_id || loading()
    };
    let title = item.title.clone().unwrap_or_default();

    view! {
        <div class="p-4 rounded-lg shadow bg-white">
            <div class="flex items-start gap-4">
                {item.thumbnail.clone().map(|src| {
                    let alt = title.clone();
                    view! { <img src=src alt=alt class="w-24 h-24 object-cover rounded" /> }
                })}
                <div class="flex-1">
                    <h2 class="text-lg font-semibold text-violet-700">{title.clone()}</h2>
                    <p class="text-sm text-gray-600">{item.subtitle()}</p>
                    <p class="mt-2 text-gray-700 line-clamp-3">{item.description.clone().unwrap_or_default()}</p>
                    <div class="mt-3 flex gap-2">
                        <button
                            type="button"
                            class="px-3 py-1 rounded bg-teal-500 hover:bg-teal-700 transition-all cursor-pointer text-white disabled:opacity-60 disabled:cursor-not-allowed"
                            disabled=disabled
                            on:click=move |_| {
                                if let Some(id) = nasa_id.clone() {
                                    load_details.run(id);
                                }
                            }
                        >
                            {
                                let loading = loading.clone();
                                move || if loading() { "Loading…" } else { "Details" }
                            }
                        </button>
                    </div>
                </div>
            </div>
            <div class="mt-3">
                {move || match detail() {
                    None => None,
                    Some(DetailState::Loading(_)) => {
                        Some(view! { <p class="text-sm text-gray-600">"Fetching details…"</p> }.into_any())
                    }
                    Some(DetailState::Failed(err)) => {
                        Some(view! { <p class="text-sm text-red-600">{err.message}</p> }.into_any())
                    }
                    Some(DetailState::Ready(details)) => Some(view! { <DetailsPanel details=details /> }.into_any()),
                }}
            </div>
        </div>
    }
}

#[component]
fn DetailsPanel(details: AssetDetails) -> impl IntoView {
    let count = details.manifest.len();
    let has_more = details.has_more_manifest();
    let manifest = details.manifest_preview().to_vec();
    let metadata = details.metadata_pretty();

    view! {
        <div class="p-4 rounded border bg-slate-50">
            <h4 class="font-medium mb-2">"Manifest Files (" {count} ")"</h4>
            <ul class="space-y-2 max-h-64 overflow-auto">
                {manifest
                    .into_iter()
                    .map(|url| {
                        let href = url.clone();
                        view! {
                            <li class="text-sm">
                                <ExternalLink href=href text=url />
                            </li>
                        }
                    })
                    .collect_view()}
                {has_more.then(|| view! { <li class="text-sm text-gray-600">"…and more"</li> })}
            </ul>

            <h4 class="font-medium mt-4 mb-2">"Metadata"</h4>
            {match details.metadata_url {
                Some(url) => view! {
                    <div class="text-sm">
                        <p>"Location: " <ExternalLink href=url.clone() text=url /></p>
                        {match metadata {
                            Some(json) => view! {
                                <pre class="mt-2 p-3 bg-white border rounded max-h-64 overflow-auto text-xs">{json}</pre>
                            }
                            .into_any(),
                            None => view! {
                                <p class="mt-2 text-gray-600">"Open the location link to view metadata."</p>
                            }
                            .into_any(),
                        }}
                    </div>
                }
                .into_any(),
                None => view! { <p class="text-sm text-gray-600">"No metadata available."</p> }.into_any(),
            }}

            <h4 class="font-medium mt-4 mb-2">"Captions"</h4>
            {match details.captions_url {
                Some(url) => view! {
                    <p class="text-sm">"Location: " <ExternalLink href=url.clone() text=url /></p>
                }
                .into_any(),
                None => view! { <p class="text-sm text-gray-600">"No captions available."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ExternalLink(href: String, text: String) -> impl IntoView {
    view! {
        <a class="text-teal-700 underline break-all" href=href target="_blank" rel="noreferrer">
            {text}
        </a>
    }
}
