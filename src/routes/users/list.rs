//! Users list route: table of users, an inline create panel, and per-row
//! delete. Every successful mutation is followed by a full refetch.

use crate::{
    app_lib::{ApiError, HttpClient},
    components::{users::UserForm, Button, Notice, NoticeBanner, Spinner},
    features::users::{
        client,
        form::FormMode,
        hooks::use_users_list,
        types::{User, UserInput},
    },
    routes::paths,
};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::components::A;

const HEADER_CELL: &str =
    "text-left p-3 border-b text-xs font-medium text-gray-500 uppercase tracking-wider";
const CELL: &str = "p-3 border-b text-sm text-gray-900";

/// Renders the users table and fetches data on mount.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let users = use_users_list();
    let state = users.state();
    let (show_create, set_show_create) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    let create_action = Action::new_local(move |input: &UserInput| {
        let input = input.clone();
        async move { client::create_user(&HttpClient::api(), &input).await }
    });
    let creating = create_action.pending();

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(_) => {
                    set_notice.set(Some(Notice::success("User created successfully.")));
                    set_show_create.set(false);
                    users.refetch();
                }
                Err(err) => set_notice.set(Some(Notice::error(err.message))),
            }
        }
    });

    let delete_action = Action::new_local(move |id: &String| {
        let id = id.clone();
        async move { client::delete_user(&HttpClient::api(), &id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            set_pending_delete.set(None);
            match result {
                Ok(_) => {
                    set_notice.set(Some(Notice::success("User deleted.")));
                    users.refetch();
                }
                Err(err) => set_notice.set(Some(Notice::error(err.message))),
            }
        }
    });

    let on_create = Callback::new(move |input: UserInput| {
        set_notice.set(None);
        create_action.dispatch(input);
    });

    let on_delete = Callback::new(move |id: String| {
        set_notice.set(None);
        set_pending_delete.set(Some(id.clone()));
        delete_action.dispatch(id);
    });

    let rows = move || state.with(|state| state.data().cloned().unwrap_or_default());
    let show_empty = move || {
        state.with(|state| !state.is_loading() && state.data().is_none_or(Vec::is_empty))
    };

    view! {
        <div class="max-w-4xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-semibold text-gray-900">"Users"</h1>
                <Button on_click=Callback::new(move |_: MouseEvent| set_show_create.update(|open| *open = !*open))>
                    {move || if show_create.get() { "Close" } else { "Add User" }}
                </Button>
            </div>

            <p class="text-gray-600">"Manage your users: list, create, update, and delete."</p>

            <NoticeBanner notice=notice />

            <Show when=move || show_create.get()>
                <UserForm
                    mode=FormMode::Create
                    pending=creating
                    on_submit=on_create
                    on_cancel=Callback::new(move |()| set_show_create.set(false))
                />
            </Show>

            <div>
                <Show when=move || state.with(|state| state.is_loading())>
                    <Spinner label="Loading users…" />
                </Show>
                {move || {
                    state
                        .with(|state| if state.is_loading() { None } else { state.error().cloned() })
                        .map(|err: ApiError| view! { <p class="text-red-600">{err.message}</p> })
                }}
            </div>

            <div class="overflow-x-auto">
                <table class="min-w-full border border-gray-200 rounded">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class=HEADER_CELL>"Username"</th>
                            <th class=HEADER_CELL>"Email"</th>
                            <th class=HEADER_CELL>"Role"</th>
                            <th class=HEADER_CELL>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=show_empty>
                            <tr>
                                <td class="p-3 text-gray-500" colspan="4">
                                    "No users found."
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=rows
                            key=|user| user.clone()
                            children=move |user| {
                                view! {
                                    <UserRow
                                        user=user
                                        pending_delete=pending_delete
                                        creating=creating
                                        on_delete=on_delete
                                    />
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn UserRow(
    user: User,
    pending_delete: ReadSignal<Option<String>>,
    #[prop(into)] creating: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = user.id.clone();
    let deleting = {
        let id = id.clone();
        move || id.is_some() && pending_delete.with(|pending| *pending == id)
    };
    let view_link = match &id {
        Some(id) => view! {
            <A
                href=paths::user_detail(id)
                {..}
                class="text-teal-700 hover:text-teal-800 underline"
            >
                "View"
            </A>
        }
        .into_any(),
        None => view! { <span class="text-gray-400">"View"</span> }.into_any(),
    };
    let busy = {
        let deleting = deleting.clone();
        move || deleting() || creating.get()
    };

    view! {
        <tr class="odd:bg-white even:bg-gray-50">
            <td class=CELL>{user.display_username().to_string()}</td>
            <td class=CELL>{user.display_email().to_string()}</td>
            <td class=CELL>{user.display_role().to_string()}</td>
            <td class=CELL>
                <div class="flex gap-3">
                    {view_link}
                    <button
                        type="button"
                        class="text-red-600 hover:text-red-700 disabled:opacity-50"
                        disabled=busy
                        on:click=move |_| {
                            if let Some(id) = id.clone() {
                                on_delete.run(id);
                            }
                        }
                    >
                        {move || if deleting() { "Deleting…" } else { "Delete" }}
                    </button>
                </div>
            </td>
        </tr>
    }
}
