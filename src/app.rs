//! Party Planner App
//!
//! Root component: title, party list with creation form, and detail section.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpPartyApi;
use crate::components::{NewPartyForm, PartyList, SelectedParty};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, HttpPartyApi::new(ApiConfig::default()));

    // Provide context to all children
    provide_context(ctx);

    // Load everything once on mount
    Effect::new(move |_| ctx.bootstrap());

    view! { <PartyPlanner /> }
}

/// Whole page layout, built from the store in context
#[component]
pub fn PartyPlanner() -> impl IntoView {
    view! {
        <h1>"Party Planner"</h1>
        <main>
            <section>
                <h2>"Upcoming Parties"</h2>
                <PartyList />
                <h3>"Create a new party"</h3>
                <NewPartyForm />
            </section>
            <section id="selected">
                <h2>"Party Details"</h2>
                <SelectedParty />
            </section>
        </main>
    }
}
