//! Selected Party Component
//!
//! Detail section: placeholder, or the selected party with its guests and a
//! remove button.

use leptos::either::Either;
use leptos::prelude::*;

use crate::components::GuestList;
use crate::context::use_app_context;
use crate::dates::display_date;
use crate::models::Party;
use crate::store::AppStateStoreFields;

#[component]
fn PartyDetail(party: Party) -> impl IntoView {
    let ctx = use_app_context();
    let id = party.id;
    let day = display_date(&party.date);

    view! {
        <section class="party-detail">
            <h3>{party.name} " #" {id}</h3>
            <time datetime=party.date>{day}</time>
            <address>{party.location}</address>
            <p>{party.description}</p>
            <GuestList party_id=id />
            <button on:click=move |_| ctx.remove_party(id)>"Remove Party"</button>
        </section>
    }
}

#[component]
pub fn SelectedParty() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.store.selected_party().get() {
        Some(party) => Either::Left(view! { <PartyDetail party=party /> }),
        None => Either::Right(view! { <p>"Please select a party to learn more."</p> }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::fixtures::{guest, party, rsvp};
    use crate::components::render_html;
    use crate::store::AppState;

    #[test]
    fn test_placeholder_without_selection() {
        let html = render_html(AppState::new(), || view! { <SelectedParty /> });

        assert!(html.contains("Please select a party to learn more."));
        assert!(!html.contains("<time"));
        assert!(!html.contains("Remove Party"));
    }

    #[test]
    fn test_detail_shows_date_portion() {
        let stored = "2024-05-01T18:30:00.000Z";
        let state = AppState {
            parties: vec![party(7, stored)],
            selected_party: Some(party(7, stored)),
            ..AppState::new()
        };

        let html = render_html(state, || view! { <SelectedParty /> });

        assert!(html.contains(&format!(r#"datetime="{}""#, stored)));
        assert!(html.contains(&format!(">{}</time>", &stored[..10])));
        assert!(html.contains("<address>Room 7</address>"));
        assert!(html.contains("<p>About party 7</p>"));
        assert!(html.contains("Remove Party"));
        assert!(!html.contains("Please select"));
    }

    #[test]
    fn test_detail_lists_attending_guests() {
        let date = "2024-05-01T00:00:00.000Z";
        let state = AppState {
            selected_party: Some(party(1, date)),
            guests: vec![guest(10, "Ada"), guest(11, "Bob"), guest(12, "Cy")],
            rsvps: vec![rsvp(1, 10, 1), rsvp(2, 11, 2), rsvp(3, 12, 1)],
            ..AppState::new()
        };

        let html = render_html(state, || view! { <SelectedParty /> });

        assert!(html.contains("<li>Ada</li>"));
        assert!(html.contains("<li>Cy</li>"));
        assert!(!html.contains("Bob"));
    }
}
