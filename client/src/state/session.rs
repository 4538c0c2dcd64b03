//! Session store: keeps `AuthState` in step with the auth provider.
//!
//! ARCHITECTURE
//! ============
//! The store is the only writer of the published auth state. It resolves the
//! initial session and every change notification through the same path:
//! extract the user, look up the role on the profile row when the metadata
//! has none, publish. Publishing goes through `SessionSink` so the store can
//! be driven without a reactive runtime.
//!
//! ORDERING
//! ========
//! Each resolution takes a sequence ticket when it starts. A result whose
//! ticket is older than the last published one is dropped, so a slow initial
//! fetch cannot overwrite a newer notification. Notifications themselves are
//! handled one at a time in delivery order.
//!
//! ERROR HANDLING
//! ==============
//! Provider and lookup failures are logged and degrade to "signed out" or
//! "signed in without role". Nothing here returns an error to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::Cell;
use std::rc::Rc;

use futures::StreamExt;
use leptos::prelude::*;

use crate::net::auth_events::AuthChanges;
use crate::net::provider::{AuthProvider, ProfileStore};
use crate::net::types::{AuthChange, AuthUser};
use crate::state::auth::{AppUser, AuthState};

/// Destination for published session state.
pub trait SessionSink {
    /// Replace the current user.
    fn publish(&self, user: Option<AppUser>);

    /// Clear the loading flag. Called once.
    fn settle(&self);
}

impl SessionSink for RwSignal<AuthState> {
    fn publish(&self, user: Option<AppUser>) {
        self.update(|state| state.user = user);
    }

    fn settle(&self) {
        self.update(|state| state.loading = false);
    }
}

pub struct SessionStore<A, P, S> {
    auth: Rc<A>,
    profiles: Rc<P>,
    sink: S,
    next_ticket: Cell<u64>,
    published: Cell<Option<u64>>,
    settled: Cell<bool>,
}

impl<A, P, S> SessionStore<A, P, S>
where
    A: AuthProvider,
    P: ProfileStore,
    S: SessionSink,
{
    pub fn new(auth: Rc<A>, profiles: Rc<P>, sink: S) -> Self {
        Self {
            auth,
            profiles,
            sink,
            next_ticket: Cell::new(0),
            published: Cell::new(None),
            settled: Cell::new(false),
        }
    }

    /// Resolve the initial session and follow `changes` until the
    /// subscription is dropped.
    pub async fn run(&self, changes: AuthChanges) {
        futures::join!(self.initialize(), self.listen(changes));
    }

    /// Resolve and publish the provider's current session.
    pub async fn initialize(&self) {
        let ticket = self.take_ticket();
        let user = match self.auth.get_session().await {
            Ok(Some(session)) => Some(self.resolve_user(&session.user).await),
            Ok(None) => None,
            Err(e) => {
                leptos::logging::warn!("initial session check failed: {e}");
                None
            }
        };
        self.commit(ticket, user);
    }

    /// Handle change notifications in order until the stream closes.
    pub async fn listen(&self, mut changes: AuthChanges) {
        while let Some(change) = changes.next().await {
            self.handle_change(change).await;
        }
    }

    async fn handle_change(&self, change: AuthChange) {
        let ticket = self.take_ticket();
        leptos::logging::log!("auth change {:?} (ticket {ticket})", change.event);
        let user = match change.session {
            Some(session) => Some(self.resolve_user(&session.user).await),
            None => None,
        };
        self.commit(ticket, user);
    }

    /// Turn a provider user into the published form, filling in the role
    /// from the profile row when the metadata lacks one.
    pub async fn resolve_user(&self, raw: &AuthUser) -> AppUser {
        let user = AppUser::from(raw);
        if user.role().is_some() {
            return user;
        }
        match self.profiles.fetch_role(&user.id).await {
            Ok(Some(role)) if !role.is_empty() => user.with_role(role),
            Ok(_) => user,
            Err(e) => {
                leptos::logging::warn!("role lookup failed for {}: {e}", user.id);
                user
            }
        }
    }

    fn take_ticket(&self) -> u64 {
        let ticket = self.next_ticket.get();
        self.next_ticket.set(ticket + 1);
        ticket
    }

    fn commit(&self, ticket: u64, user: Option<AppUser>) {
        if self.published.get().is_none_or(|last| ticket > last) {
            self.published.set(Some(ticket));
            self.sink.publish(user);
        }
        if !self.settled.replace(true) {
            self.sink.settle();
        }
    }
}

/// Start the session store for the app's lifetime. The provider
/// subscription and refresh tick end when the current owner is cleaned up.
#[cfg(feature = "hydrate")]
pub fn start_session_store(client: crate::net::supabase::SupabaseClient, auth: RwSignal<AuthState>) {
    let (subscription, changes) = client.subscribe();
    let auto_refresh = client.start_auto_refresh();
    let client = Rc::new(client);
    let store = SessionStore::new(Rc::clone(&client), client, auth);
    leptos::task::spawn_local(async move { store.run(changes).await });

    on_cleanup(move || {
        subscription.unsubscribe();
        drop(auto_refresh);
    });
}
