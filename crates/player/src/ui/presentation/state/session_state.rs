//! Session state management using Dioxus signals
//!
//! Wraps the domain `NavigationSession` in a signal. Every mutation goes
//! through the store's transition methods; views only read.

use dioxus::prelude::*;

use reelfolio_domain::{IntroExit, NavigationSession, Profile, Transition};

/// Single-writer session store, provided once at the app root
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: Signal<NavigationSession>,
}

impl SessionStore {
    /// Create a store in the `Unselected` phase
    pub fn new() -> Self {
        Self {
            session: Signal::new(NavigationSession::new()),
        }
    }

    /// Read the session, subscribing the calling component to changes
    pub fn with<R>(&self, f: impl FnOnce(&NavigationSession) -> R) -> R {
        f(&self.session.read())
    }

    /// Profile picked on the selector
    pub fn select_profile(&mut self, profile: Profile) -> Transition {
        let profile_id = profile.id.clone();
        let outcome = self.session.write().select_profile(profile);
        if outcome.is_applied() {
            tracing::info!(profile = %profile_id, "Profile selected, starting intro");
        } else {
            tracing::debug!(profile = %profile_id, "Profile selection ignored");
        }
        outcome
    }

    /// Intro finished or was dismissed
    pub fn finish_intro(&mut self, exit: IntroExit) -> Transition {
        let outcome = self.session.write().finish_intro(exit);
        if outcome.is_applied() {
            tracing::debug!(?exit, "Intro closed");
        }
        outcome
    }

    /// "Switch Profile"
    pub fn reset_profile(&mut self) -> Transition {
        let outcome = self.session.write().reset_profile();
        if outcome.is_applied() {
            tracing::info!("Profile cleared");
        }
        outcome
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session store from Dioxus context
pub fn use_session_store() -> SessionStore {
    use_context::<SessionStore>()
}
