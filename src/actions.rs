//! State Actions
//!
//! API round trips paired with the state updates they cause. Every failure is
//! logged here and handed back to the caller; state is left untouched on error.

use log::{debug, error, info, warn};

use crate::api::{ApiError, PartyApi};
use crate::models::PartyDraft;
use crate::store::StateWriter;

/// Replace the party list with the server's
pub async fn load_parties(api: &impl PartyApi, state: &impl StateWriter) -> Result<(), ApiError> {
    let parties = api
        .list_parties()
        .await
        .inspect_err(|e| error!("[API] list parties failed: {}", e))?;
    debug!("[API] loaded {} parties", parties.len());
    state.replace_parties(parties);
    Ok(())
}

/// Fetch one party and make it the selection
pub async fn select_party(api: &impl PartyApi, state: &impl StateWriter, id: u32) -> Result<(), ApiError> {
    let party = api
        .get_party(id)
        .await
        .inspect_err(|e| error!("[API] get party #{} failed: {}", id, e))?;
    state.set_selected_party(Some(party));
    Ok(())
}

pub async fn load_rsvps(api: &impl PartyApi, state: &impl StateWriter) -> Result<(), ApiError> {
    let rsvps = api
        .list_rsvps()
        .await
        .inspect_err(|e| error!("[API] list rsvps failed: {}", e))?;
    debug!("[API] loaded {} rsvps", rsvps.len());
    state.replace_rsvps(rsvps);
    Ok(())
}

pub async fn load_guests(api: &impl PartyApi, state: &impl StateWriter) -> Result<(), ApiError> {
    let guests = api
        .list_guests()
        .await
        .inspect_err(|e| error!("[API] list guests failed: {}", e))?;
    debug!("[API] loaded {} guests", guests.len());
    state.replace_guests(guests);
    Ok(())
}

/// POST the draft, then refetch the party list.
///
/// The server's response is not merged into state; the refetch is what makes
/// the new party appear. Any completed POST is refetched after, whatever its
/// status, but the draft is only cleared when the server accepted it (2xx) so
/// a rejected create keeps what the user typed. If the POST never completes,
/// nothing is refetched.
pub async fn create_party(
    api: &impl PartyApi,
    state: &impl StateWriter,
    draft: &PartyDraft,
) -> Result<(), ApiError> {
    let status = api
        .create_party(draft)
        .await
        .inspect_err(|e| error!("[API] create party failed: {}", e))?;
    if (200..300).contains(&status) {
        info!("[API] created party {:?}", draft.name);
        state.reset_draft();
    } else {
        warn!("[API] create party {:?} answered {}", draft.name, status);
    }
    load_parties(api, state).await
}

/// DELETE a party, clear the selection and refetch the party list.
///
/// A failed DELETE leaves the selection in place and is not surfaced anywhere.
/// It is still logged at debug level rather than discarded outright.
pub async fn remove_party(api: &impl PartyApi, state: &impl StateWriter, id: u32) -> Result<(), ApiError> {
    if let Err(e) = api.delete_party(id).await {
        debug!("[API] delete party #{} failed: {}", id, e);
        return Err(e);
    }
    state.set_selected_party(None);
    load_parties(api, state).await
}

/// Startup load: parties, then RSVPs, then guests, one after another.
/// A failed fetch is logged and does not stop the ones after it.
pub async fn bootstrap(api: &impl PartyApi, state: &impl StateWriter) {
    let _ = load_parties(api, state).await;
    let _ = load_rsvps(api, state).await;
    let _ = load_guests(api, state).await;
    info!("[APP] initial load finished");
}
