use crate::components::AppShell;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <AppShell>
                <AppRoutes />
            </AppShell>
        </Router>
    }
}
