//! Create/edit form for users. Validation lives in
//! `features::users::form`; this component renders fields and errors and hands
//! a trimmed [`UserInput`] to the caller. Surfacing submit failures is the
//! caller's job.

use crate::features::users::{
    form::{Field, FormMode, UserFormState, UserFormValues, DEFAULT_ROLES},
    types::UserInput,
};
use leptos::{ev::SubmitEvent, prelude::*};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-teal-500 focus:ring-teal-500";

#[component]
pub fn UserForm(
    mode: FormMode,
    #[prop(optional)] initial: Option<UserFormValues>,
    #[prop(optional)] roles: Option<Vec<String>>,
    #[prop(optional, into)] submit_label: Option<String>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<UserInput>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(UserFormState::new(mode, initial.unwrap_or_default()));
    let roles =
        roles.unwrap_or_else(|| DEFAULT_ROLES.iter().map(|role| role.to_string()).collect());
    let label = submit_label.unwrap_or_else(|| mode.default_submit_label().to_string());

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        if let Some(input) = form.try_update(UserFormState::submit).flatten() {
            on_submit.run(input);
        }
    };

    view! {
        <form
            on:submit=on_form_submit
            class="space-y-4 p-4 border border-gray-200 rounded-lg bg-white shadow-sm"
            novalidate=true
        >
            <TextField form=form field=Field::Name label="Username" input_type="text" placeholder="janedoe" autocomplete="off" />

            <Show when=move || mode.collects_password()>
                <TextField
                    form=form
                    field=Field::Password
                    label="Password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                />
            </Show>

            <TextField form=form field=Field::Email label="Email" input_type="email" placeholder="jane@example.com" autocomplete="off" />

            <div>
                <label for=Field::Role.id() class="block text-sm font-medium text-gray-700">
                    "Role"
                </label>
                <select
                    id=Field::Role.id()
                    class=INPUT_CLASS
                    aria-invalid=move || invalid_attr(form, Field::Role)
                    prop:value=move || form.with(|state| state.value(Field::Role).to_string())
                    on:change=move |ev| form.update(|state| state.set_value(Field::Role, event_target_value(&ev)))
                    on:blur=move |_| form.update(|state| state.blur(Field::Role))
                >
                    <option value="" disabled=true>
                        "Select a role"
                    </option>
                    {roles
                        .into_iter()
                        .map(|role| {
                            let value = role.clone();
                            view! { <option value=value>{role}</option> }
                        })
                        .collect_view()}
                </select>
                <FieldError form=form field=Field::Role />
            </div>

            <div class="flex items-center gap-3 pt-2">
                <button
                    type="submit"
                    class="rounded-lg bg-teal-600 text-white px-4 py-2 hover:bg-teal-700 disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Submitting...".to_string() } else { label.clone() }}
                </button>
                {on_cancel
                    .map(|on_cancel| {
                        view! {
                            <button
                                type="button"
                                class="rounded-lg bg-gray-200 text-gray-800 px-4 py-2 hover:bg-gray-300"
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                        }
                    })}
            </div>
        </form>
    }
}

#[component]
fn TextField(
    form: RwSignal<UserFormState>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                id=field.id()
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                autocomplete=autocomplete
                aria-invalid=move || invalid_attr(form, field)
                prop:value=move || form.with(|state| state.value(field).to_string())
                on:input=move |ev| form.update(|state| state.set_value(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|state| state.blur(field))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<UserFormState>, field: Field) -> impl IntoView {
    move || {
        form.with(|state| state.error(field)).map(|message| {
            view! { <p class="mt-1 text-sm text-red-600">{message}</p> }
        })
    }
}

fn invalid_attr(form: RwSignal<UserFormState>, field: Field) -> &'static str {
    if form.with(|state| state.error(field).is_some()) {
        "true"
    } else {
        "false"
    }
}
