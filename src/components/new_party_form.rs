//! New Party Form Component
//!
//! Every field writes straight into the store's draft on change.

use leptos::prelude::*;
use log::warn;

use crate::context::use_app_context;
use crate::dates::{display_date, to_iso_timestamp};
use crate::store::AppStateStoreFields;

/// Form for creating a new party
#[component]
pub fn NewPartyForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = ctx.store.draft();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create_party(draft.get_untracked());
    };

    view! {
        <form class="new-party-form" on:submit=submit>
            <label>
                "Name"
                <input
                    name="name"
                    required=true
                    prop:value=move || draft.read().name.clone()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.name = value);
                    }
                />
            </label>
            <label>
                "Description"
                <textarea
                    name="description"
                    rows="5"
                    cols="40"
                    placeholder="Enter the description..."
                    prop:value=move || draft.read().description.clone()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                ></textarea>
            </label>
            <label>
                "Date"
                <input
                    type="date"
                    name="date"
                    required=true
                    prop:value=move || display_date(&draft.read().date)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let iso = to_iso_timestamp(&value).unwrap_or_else(|| {
                            warn!("[FORM] unreadable date {:?}", value);
                            String::new()
                        });
                        draft.update(|d| d.date = iso);
                    }
                />
            </label>
            <label>
                "Location"
                <input
                    name="location"
                    required=true
                    prop:value=move || draft.read().location.clone()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.location = value);
                    }
                />
            </label>
            <button type="submit">"Create Party"</button>
        </form>
    }
}
