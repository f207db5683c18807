//! Guest List Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{guests_at_party, AppStateStoreFields};

/// Names of guests with an RSVP for `party_id`; empty list when there are none
#[component]
pub fn GuestList(party_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let attending = move || {
        ctx.store
            .guests()
            .with(|guests| ctx.store.rsvps().with(|rsvps| guests_at_party(guests, rsvps, party_id)))
    };

    view! {
        <ul class="guests">
            {move || {
                attending()
                    .into_iter()
                    .map(|guest| view! { <li>{guest.name}</li> })
                    .collect_view()
            }}
        </ul>
    }
}
