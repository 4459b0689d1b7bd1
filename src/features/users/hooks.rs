//! Reactive fetch hooks for the users views. Each hook owns a
//! [`RequestScope`] tied to the calling component: newer requests supersede
//! older ones and nothing is written back once the component is torn down.

use crate::{
    app_lib::{
        fetch::{FetchState, RequestScope, Ticket},
        ApiError, HttpClient,
    },
    features::users::{client, types::User},
};
use leptos::{prelude::*, task::spawn_local};

/// Users list state, fetched on mount.
#[derive(Clone, Copy)]
pub struct UsersList {
    state: RwSignal<FetchState<Vec<User>>>,
    scope: StoredValue<RequestScope>,
}

pub fn use_users_list() -> UsersList {
    let hook = UsersList {
        state: RwSignal::new(FetchState::new()),
        scope: StoredValue::new(RequestScope::new()),
    };
    close_on_cleanup(hook.scope);
    hook.refetch();
    hook
}

impl UsersList {
    pub fn state(self) -> ReadSignal<FetchState<Vec<User>>> {
        self.state.read_only()
    }

    /// Loads the list again; the previous request, if any, is superseded.
    pub fn refetch(self) {
        let ticket = self
            .scope
            .try_with_value(|scope| self.state.try_update(|state| state.begin(scope)))
            .flatten();
        let Some(ticket) = ticket else {
            return;
        };

        spawn_local(async move {
            let result = client::list_users(&HttpClient::api()).await.map(Some);
            if !settle(self.scope, self.state, ticket, result) {
                tracing::debug!("discarding stale users list response");
            }
        });
    }
}

/// Single user state, refetched whenever the id changes.
#[derive(Clone, Copy)]
pub struct UserDetail {
    state: RwSignal<FetchState<User>>,
    id: Signal<Option<String>>,
    scope: StoredValue<RequestScope>,
}

/// Without an id the hook stays idle with no data and sends nothing.
pub fn use_user_detail(id: Signal<Option<String>>) -> UserDetail {
    let hook = UserDetail {
        state: RwSignal::new(FetchState::new()),
        id,
        scope: StoredValue::new(RequestScope::new()),
    };
    close_on_cleanup(hook.scope);

    Effect::new(move |_| {
        let current = id.get();
        hook.load(current);
    });

    hook
}

impl UserDetail {
    pub fn state(self) -> ReadSignal<FetchState<User>> {
        self.state.read_only()
    }

    pub fn refetch(self) {
        self.load(self.id.get_untracked());
    }

    fn load(self, id: Option<String>) {
        let request = self
            .scope
            .try_with_value(|scope| {
                self.state
                    .try_update(|state| state.begin_for(scope, id.as_deref()))
            })
            .flatten()
            .flatten();
        let Some((ticket, id)) = request else {
            return;
        };

        spawn_local(async move {
            let result = client::get_user(&HttpClient::api(), &id).await;
            if !settle(self.scope, self.state, ticket, result) {
                tracing::debug!(user_id = %id, "discarding stale user response");
            }
        });
    }
}

/// Writes `result` into `state` if `ticket` is still current.
fn settle<T: Send + Sync + 'static>(
    scope: StoredValue<RequestScope>,
    state: RwSignal<FetchState<T>>,
    ticket: Ticket,
    result: Result<Option<T>, ApiError>,
) -> bool {
    scope
        .try_with_value(|scope| state.try_update(|state| state.settle(scope, ticket, result)))
        .flatten()
        .unwrap_or(false)
}

fn close_on_cleanup(scope: StoredValue<RequestScope>) {
    on_cleanup(move || {
        scope.try_with_value(RequestScope::close);
    });
}
