//! Media elements and scoped DOM subscriptions
//!
//! `MediaHandle` wraps a mounted `<video>`; `VisibilityObserver` and
//! `OutsideClickGuard` are RAII guards that unregister themselves on drop.
//! Keep guards in component state so they live exactly as long as the view.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{MediaHandle, OutsideClickGuard, VisibilityObserver};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{MediaHandle, OutsideClickGuard, VisibilityObserver};

/// Visible fraction at which spotlight tiles start playing.
pub const SPOTLIGHT_THRESHOLD: f64 = 0.35;

/// Visible fraction at which the hero video starts playing.
pub const HERO_THRESHOLD: f64 = 0.25;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Playback rejected: {0}")]
    Rejected(String),
    #[error("Media element unavailable")]
    Unavailable,
}

impl MediaHandle {
    /// Pause and seek back to the start.
    pub fn stop(&self) {
        self.pause();
        self.rewind();
    }
}

/// Owns a media element for the lifetime of a view.
///
/// Dropping the lease stops playback and releases the element's source.
pub struct MediaLease {
    handle: MediaHandle,
}

impl MediaLease {
    pub fn new(handle: MediaHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &MediaHandle {
        &self.handle
    }
}

impl Drop for MediaLease {
    fn drop(&mut self) {
        self.handle.stop();
        self.handle.release();
    }
}
