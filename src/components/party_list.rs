//! Party List Component
//!
//! Party names in API response order; clicking one loads its details.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Party;
use crate::store::{is_selected, AppStateStoreFields};

/// Clickable party name, marked `selected` when it is the current selection
#[component]
pub fn PartyListItem(party: Party) -> impl IntoView {
    let ctx = use_app_context();
    let id = party.id;
    let selected = move || ctx.store.selected_party().with(|s| is_selected(s.as_ref(), id));

    view! {
        <li
            class=move || if selected() { "selected" } else { "" }
            on:click=move |_| ctx.select_party(id)
        >
            <a href="#selected">{party.name}</a>
        </li>
    }
}

/// List of all parties, rebuilt whenever the party collection is replaced
#[component]
pub fn PartyList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="parties">
            {move || {
                ctx.store
                    .parties()
                    .get()
                    .into_iter()
                    .map(|party| view! { <PartyListItem party=party /> })
                    .collect_view()
            }}
        </ul>
    }
}
