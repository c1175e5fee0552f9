//! Browser media control and scoped DOM subscriptions (`web-sys`)
//!
//! Closures handed to the DOM are owned by the guard that registered them,
//! so dropping the guard both unregisters the callback and frees the closure.

use dioxus::prelude::MountedData;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};

use super::MediaError;

/// Handle to a mounted `<video>` element.
#[derive(Clone, Debug)]
pub struct MediaHandle {
    video: HtmlVideoElement,
}

impl MediaHandle {
    /// Extract the video element from an `onmounted` event.
    pub fn from_mounted(data: &MountedData, _dom_id: &str) -> Option<Self> {
        let element = data.downcast::<web_sys::Element>()?.clone();
        element
            .dyn_into::<HtmlVideoElement>()
            .ok()
            .map(|video| Self { video })
    }

    /// Start playback. Resolves to an error when the browser refuses
    /// (autoplay policy, missing source).
    pub async fn play(&self) -> Result<(), MediaError> {
        let promise = self
            .video
            .play()
            .map_err(|e| MediaError::Rejected(format!("{e:?}")))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| MediaError::Rejected(format!("{e:?}")))
    }

    /// Start playback without waiting. Rejections are logged and dropped.
    pub fn start(&self) {
        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = handle.play().await {
                tracing::debug!(error = %e, "Playback not started");
            }
        });
    }

    pub fn pause(&self) {
        let _ = self.video.pause();
    }

    pub fn rewind(&self) {
        self.video.set_current_time(0.0);
    }

    pub fn set_muted(&self, muted: bool) {
        self.video.set_muted(muted);
    }

    /// Drop the source so the browser can free decoder and network resources.
    pub fn release(&self) {
        let _ = self.video.remove_attribute("src");
        self.video.load();
    }
}

/// Scoped `IntersectionObserver` reporting visibility changes of videos.
///
/// Disconnects on drop.
pub struct VisibilityObserver {
    observer: Option<IntersectionObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64, mut on_change: impl FnMut(&MediaHandle, bool) + 'static) -> Self {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Ok(video) = entry.target().dyn_into::<HtmlVideoElement>() else {
                        continue;
                    };
                    on_change(&MediaHandle { video }, entry.is_intersecting());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| tracing::warn!(error = ?e, "IntersectionObserver unavailable"))
        .ok();

        Self {
            observer,
            _callback: callback,
        }
    }

    pub fn observe(&self, handle: &MediaHandle) {
        if let Some(observer) = &self.observer {
            observer.observe(&handle.video);
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Document-level `mousedown` listener firing when a click lands outside a
/// container element. Removes itself on drop.
pub struct OutsideClickGuard {
    document: Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl OutsideClickGuard {
    pub fn new(container: &MountedData, mut on_outside: impl FnMut() + 'static) -> Option<Self> {
        let container = container.downcast::<web_sys::Element>()?.clone();
        let document = web_sys::window()?.document()?;

        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .is_some_and(|node| container.contains(Some(&node)));
            if !inside {
                on_outside();
            }
        });

        document
            .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
            .map_err(|e| tracing::warn!(error = ?e, "Could not attach document listener"))
            .ok()?;

        Some(Self { document, callback })
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.callback.as_ref().unchecked_ref());
    }
}
