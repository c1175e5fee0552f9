//! UI state held in Dioxus signals

pub mod session_state;

pub use session_state::{use_session_store, SessionStore};
