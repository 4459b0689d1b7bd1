//! User detail route: shows one record, edits it inline, and deletes it before
//! navigating back to the list. A missing record renders a not-found state.

use crate::{
    app_lib::{fetch::FetchStatus, HttpClient},
    components::{users::UserForm, Button, ButtonVariant, Notice, NoticeBanner, Spinner},
    features::users::{
        client,
        form::{FormMode, UserFormValues},
        hooks::use_user_detail,
        types::UserInput,
    },
    routes::{paths, NotFoundContent},
};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::{
    components::A,
    hooks::{use_navigate, use_params_map},
};

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = Signal::derive(move || {
        params
            .with(|params| params.get("id"))
            .filter(|id| !id.trim().is_empty())
    });
    let detail = use_user_detail(user_id);
    let state = detail.state();
    let navigate = use_navigate();

    let (show_edit, set_show_edit) = signal(false);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    let update_action = Action::new_local(move |(id, input): &(String, UserInput)| {
        let id = id.clone();
        let input = input.clone();
        async move { client::update_user(&HttpClient::api(), &id, &input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(_) => {
                    set_notice.set(Some(Notice::success("Changes saved.")));
                    set_show_edit.set(false);
                    detail.refetch();
                }
                Err(err) => set_notice.set(Some(Notice::error(err.message))),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_user(&HttpClient::api(), &id).await }
    });
    let deleting = delete_action.pending();

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(_) => navigate(paths::USERS, Default::default()),
                Err(err) => set_notice.set(Some(Notice::error(err.message))),
            }
        }
    });

    let on_update = Callback::new(move |input: UserInput| {
        set_notice.set(None);
        let id = user_id.get_untracked().unwrap_or_default();
        update_action.dispatch((id, input));
    });

    let on_delete = Callback::new(move |_: MouseEvent| {
        set_notice.set(None);
        delete_action.dispatch(user_id.get_untracked().unwrap_or_default());
    });

    let loading = move || state.with(|state| state.is_loading());
    let missing = move || {
        state.with(|state| {
            state.error().is_some_and(|err| err.is_not_found())
                || (matches!(state.status(), FetchStatus::Success) && state.data().is_none())
        })
    };

    view! {
        <Show
            when=move || !missing()
            fallback=|| view! {
                <NotFoundContent title="User not found" message="This user does not exist or was removed." />
            }
        >
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-semibold text-gray-900">"User Detail"</h1>
                    <A href=paths::USERS {..} class="text-teal-700 hover:text-teal-800 underline">
                        "Back to Users"
                    </A>
                </div>

                <div class="text-gray-600">
                    {move || {
                        state.with(|state| {
                            if state.is_loading() {
                                view! { <Spinner label="Loading user…" /> }.into_any()
                            } else if let Some(err) = state.error() {
                                view! { <p class="text-red-600">{err.message.clone()}</p> }.into_any()
                            } else {
                                let id = state
                                    .data()
                                    .and_then(|user| user.id.clone())
                                    .or_else(|| user_id.get_untracked())
                                    .unwrap_or_default();
                                view! {
                                    <p>"Viewing user ID: " <span class="font-mono">{id}</span></p>
                                }
                                .into_any()
                            }
                        })
                    }}
                </div>

                <NoticeBanner notice=notice />

                <div class="flex gap-3">
                    <Button
                        disabled=Signal::derive(loading)
                        on_click=Callback::new(move |_: MouseEvent| set_show_edit.update(|open| *open = !*open))
                    >
                        {move || if show_edit.get() { "Close" } else { "Edit" }}
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        disabled=Signal::derive(move || deleting.get() || loading())
                        on_click=on_delete
                    >
                        {move || if deleting.get() { "Deleting…" } else { "Delete" }}
                    </Button>
                </div>

                <div class="border rounded-lg p-4 bg-gray-50">
                    <h2 class="text-xl font-semibold">"Details"</h2>
                    {move || {
                        state.with(|state| match state.data() {
                            Some(user) if !state.is_loading() && state.error().is_none() => view! {
                                <div class="mt-2 text-gray-700 space-y-1">
                                    <p><span class="font-medium">"Username: "</span>{user.display_username().to_string()}</p>
                                    <p><span class="font-medium">"Email: "</span>{user.display_email().to_string()}</p>
                                    <p><span class="font-medium">"Role: "</span>{user.display_role().to_string()}</p>
                                </div>
                            }
                            .into_any(),
                            _ => view! { <p class="mt-2 text-gray-600">"No details available."</p> }.into_any(),
                        })
                    }}
                </div>

                <Show when=move || show_edit.get()>
                    {move || {
                        let initial = state
                            .with_untracked(|state| state.data().map(UserFormValues::from_user))
                            .unwrap_or_default();
                        view! {
                            <UserForm
                                mode=FormMode::Edit
                                initial=initial
                                pending=update_action.pending()
                                on_submit=on_update
                                on_cancel=Callback::new(move |()| set_show_edit.set(false))
                            />
                        }
                    }}
                </Show>
            </div>
        </Show>
    }
}
