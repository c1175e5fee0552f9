//! Desktop media control through the webview
//!
//! Elements are addressed by DOM id and driven with `document::eval`.
//! There is no visibility bridge on desktop: observed media are treated as
//! visible as soon as they mount.

use dioxus::prelude::MountedData;
use std::cell::RefCell;

use super::MediaError;

/// Handle to a mounted `<video>` element, addressed by id.
#[derive(Clone, Debug)]
pub struct MediaHandle {
    id: String,
}

impl MediaHandle {
    pub fn from_mounted(_data: &MountedData, dom_id: &str) -> Option<Self> {
        if dom_id.is_empty() {
            return None;
        }
        Some(Self {
            id: dom_id.to_string(),
        })
    }

    fn script(&self, body: &str) -> Option<String> {
        let id = serde_json::to_string(&self.id).ok()?;
        Some(format!(
            "const v = document.getElementById({id}); if (!v) {{ return false; }} {body}"
        ))
    }

    fn fire(&self, body: &str) {
        if let Some(js) = self.script(body) {
            let _ = dioxus::document::eval(&js);
        }
    }

    pub async fn play(&self) -> Result<(), MediaError> {
        let js = self
            .script("try { await v.play(); return true; } catch (_) { return false; }")
            .ok_or(MediaError::Unavailable)?;
        match dioxus::document::eval(&js).join::<bool>().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MediaError::Rejected(format!("play() refused for #{}", self.id))),
            Err(e) => Err(MediaError::Rejected(e.to_string())),
        }
    }

    pub fn start(&self) {
        self.fire("v.play().catch(() => {}); return true;");
    }

    pub fn pause(&self) {
        self.fire("v.pause(); return true;");
    }

    pub fn rewind(&self) {
        self.fire("v.currentTime = 0; return true;");
    }

    pub fn set_muted(&self, muted: bool) {
        self.fire(&format!("v.muted = {muted}; return true;"));
    }

    pub fn release(&self) {
        self.fire("v.removeAttribute('src'); v.load(); return true;");
    }
}

/// Always-visible stand-in for the browser `IntersectionObserver`.
pub struct VisibilityObserver {
    on_change: RefCell<Box<dyn FnMut(&MediaHandle, bool)>>,
}

impl VisibilityObserver {
    pub fn new(_threshold: f64, on_change: impl FnMut(&MediaHandle, bool) + 'static) -> Self {
        Self {
            on_change: RefCell::new(Box::new(on_change)),
        }
    }

    pub fn observe(&self, handle: &MediaHandle) {
        if let Ok(mut on_change) = self.on_change.try_borrow_mut() {
            on_change(handle, true);
        }
    }
}

/// Desktop has no document listener bridge; menus close on mouse leave.
pub struct OutsideClickGuard;

impl OutsideClickGuard {
    pub fn new(_container: &MountedData, _on_outside: impl FnMut() + 'static) -> Option<Self> {
        None
    }
}
