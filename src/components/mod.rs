//! UI Components
//!
//! Leptos view functions over the application store.

mod guest_list;
mod new_party_form;
mod party_list;
mod selected_party;

pub use guest_list::GuestList;
pub use new_party_form::NewPartyForm;
pub use party_list::PartyList;
pub use selected_party::SelectedParty;

/// Render a view to HTML against a store seeded with `state`
#[cfg(test)]
pub(crate) fn render_html<V: leptos::tachys::view::RenderHtml>(
    state: crate::store::AppState,
    view: impl FnOnce() -> V,
) -> String {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use reactive_stores::Store;

    use crate::api::HttpPartyApi;
    use crate::config::ApiConfig;
    use crate::context::AppContext;

    let owner = Owner::new();
    owner.with(|| {
        let store = Store::new(state);
        provide_context(AppContext::new(store, HttpPartyApi::new(ApiConfig::default())));
        view().to_html()
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Guest, Party, Rsvp};

    pub fn party(id: u32, date: &str) -> Party {
        Party {
            id,
            name: format!("Party {}", id),
            description: format!("About party {}", id),
            date: date.to_string(),
            location: format!("Room {}", id),
        }
    }

    pub fn guest(id: u32, name: &str) -> Guest {
        Guest { id, name: name.to_string() }
    }

    pub fn rsvp(id: u32, guest_id: u32, event_id: u32) -> Rsvp {
        Rsvp { id, guest_id, event_id }
    }
}
