//! Application Context
//!
//! Store and API client shared with every component via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::HttpPartyApi;
use crate::models::PartyDraft;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<HttpPartyApi, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpPartyApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
        }
    }

    fn api(&self) -> HttpPartyApi {
        self.api.get_value()
    }

    /// Initial sequential load of parties, RSVPs and guests
    pub fn bootstrap(&self) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            actions::bootstrap(&api, &store).await;
        });
    }

    /// Fetch a party and show it in the detail section
    pub fn select_party(&self, id: u32) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            let _ = actions::select_party(&api, &store, id).await;
        });
    }

    /// Submit a new party; failures end up in the console only
    pub fn create_party(&self, draft: PartyDraft) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            let _ = actions::create_party(&api, &store, &draft).await;
        });
    }

    pub fn remove_party(&self, id: u32) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            let _ = actions::remove_party(&api, &store, id).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
