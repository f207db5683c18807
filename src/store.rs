//! Global Application State Store
//!
//! Single source of truth for rendering. Collections are always replaced
//! wholesale, never merged.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Guest, Party, PartyDraft, Rsvp};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Parties in API response order
    pub parties: Vec<Party>,
    /// Party shown in the detail section
    pub selected_party: Option<Party>,
    pub rsvps: Vec<Rsvp>,
    pub guests: Vec<Guest>,
    /// New-party form input not yet submitted
    pub draft: PartyDraft,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, party_id: u32) -> bool {
        is_selected(self.selected_party.as_ref(), party_id)
    }

    /// Guests attending the selected party, empty when nothing is selected
    pub fn guests_at_selected(&self) -> Vec<Guest> {
        match &self.selected_party {
            Some(party) => guests_at_party(&self.guests, &self.rsvps, party.id),
            None => Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Derived Queries
// ========================

pub fn is_selected(selected: Option<&Party>, party_id: u32) -> bool {
    selected.is_some_and(|party| party.id == party_id)
}

/// Guests with at least one RSVP for `party_id`, in guest-list order
pub fn guests_at_party(guests: &[Guest], rsvps: &[Rsvp], party_id: u32) -> Vec<Guest> {
    guests
        .iter()
        .filter(|guest| {
            rsvps
                .iter()
                .any(|rsvp| rsvp.guest_id == guest.id && rsvp.event_id == party_id)
        })
        .cloned()
        .collect()
}

// ========================
// State Updates
// ========================

/// The only ways fetched data enters application state
pub trait StateWriter {
    fn replace_parties(&self, parties: Vec<Party>);
    fn set_selected_party(&self, party: Option<Party>);
    fn replace_rsvps(&self, rsvps: Vec<Rsvp>);
    fn replace_guests(&self, guests: Vec<Guest>);
    fn reset_draft(&self);
}

impl StateWriter for AppStore {
    fn replace_parties(&self, parties: Vec<Party>) {
        self.parties().set(parties);
    }

    fn set_selected_party(&self, party: Option<Party>) {
        self.selected_party().set(party);
    }

    fn replace_rsvps(&self, rsvps: Vec<Rsvp>) {
        self.rsvps().set(rsvps);
    }

    fn replace_guests(&self, guests: Vec<Guest>) {
        self.guests().set(guests);
    }

    fn reset_draft(&self) {
        self.draft().set(PartyDraft::default());
    }
}

/// Non-reactive state, for driving updates without a DOM
impl StateWriter for RefCell<AppState> {
    fn replace_parties(&self, parties: Vec<Party>) {
        self.borrow_mut().parties = parties;
    }

    fn set_selected_party(&self, party: Option<Party>) {
        self.borrow_mut().selected_party = party;
    }

    fn replace_rsvps(&self, rsvps: Vec<Rsvp>) {
        self.borrow_mut().rsvps = rsvps;
    }

    fn replace_guests(&self, guests: Vec<Guest>) {
        self.borrow_mut().guests = guests;
    }

    fn reset_draft(&self) {
        self.borrow_mut().draft = PartyDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn party(id: u32) -> Party {
        Party {
            id,
            name: format!("Party {}", id),
            description: String::new(),
            date: "2024-05-01T00:00:00.000Z".to_string(),
            location: String::new(),
        }
    }

    fn guest(id: u32, name: &str) -> Guest {
        Guest { id, name: name.to_string() }
    }

    fn rsvp(id: u32, guest_id: u32, event_id: u32) -> Rsvp {
        Rsvp { id, guest_id, event_id }
    }

    #[test]
    fn test_guests_at_party_matches_rsvps() {
        let guests = vec![guest(10, "Ada"), guest(11, "Bob"), guest(12, "Cy")];
        let rsvps = vec![rsvp(1, 12, 1), rsvp(2, 10, 1), rsvp(3, 11, 2), rsvp(4, 10, 1)];

        let at_one = guests_at_party(&guests, &rsvps, 1);
        // Guest order, no duplicates from repeated RSVPs
        assert_eq!(at_one, vec![guest(10, "Ada"), guest(12, "Cy")]);

        let at_two = guests_at_party(&guests, &rsvps, 2);
        assert_eq!(at_two, vec![guest(11, "Bob")]);
    }

    #[test]
    fn test_guests_at_party_without_rsvps_is_empty() {
        let guests = vec![guest(10, "Ada")];
        assert!(guests_at_party(&guests, &[], 1).is_empty());
        assert!(guests_at_party(&guests, &[rsvp(1, 10, 2)], 1).is_empty());
    }

    #[test]
    fn test_rsvp_for_unknown_guest_is_ignored() {
        let guests = vec![guest(10, "Ada")];
        let rsvps = vec![rsvp(1, 99, 1)];
        assert!(guests_at_party(&guests, &rsvps, 1).is_empty());
    }

    #[test]
    fn test_exactly_one_party_marked_selected() {
        let state = AppState {
            parties: vec![party(1), party(2), party(3)],
            selected_party: Some(party(2)),
            ..AppState::new()
        };
        let marked: Vec<u32> = state
            .parties
            .iter()
            .filter(|p| state.is_selected(p.id))
            .map(|p| p.id)
            .collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn test_no_selection_marks_none() {
        let state = AppState {
            parties: vec![party(1), party(2)],
            ..AppState::new()
        };
        assert!(state.parties.iter().all(|p| !state.is_selected(p.id)));
        assert!(state.guests_at_selected().is_empty());
    }

    #[test]
    fn test_refcell_writer_replaces_wholesale() {
        let state = RefCell::new(AppState::new());
        state.replace_parties(vec![party(1), party(2)]);
        state.replace_parties(vec![party(3)]);
        assert_eq!(state.borrow().parties, vec![party(3)]);

        state.set_selected_party(Some(party(3)));
        state.replace_guests(vec![guest(10, "Ada")]);
        state.replace_rsvps(vec![rsvp(1, 10, 3)]);
        assert_eq!(state.borrow().guests_at_selected(), vec![guest(10, "Ada")]);

        state.set_selected_party(None);
        assert!(state.borrow().selected_party.is_none());
    }
}
