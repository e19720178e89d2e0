//! Browser glue for the entrance animations.

use folio_core::reveal::{Reveal, VISIBILITY_THRESHOLD};
use leptos::html;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Monotonic time since page load.
pub fn now() -> Duration {
    let millis = window().performance().map(|p| p.now()).unwrap_or(0.0);
    Duration::from_secs_f64(millis.max(0.0) / 1000.0)
}

/// Flips to `true` on the first animation frame after mount, so CSS
/// transitions start from the hidden style.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        request_animation_frame(move || {
            set_mounted.try_set(true);
        });
    });
    mounted
}

/// Reports `true` once `target` first becomes at least 10% visible. It
/// never goes back to `false`, and the observer is dropped after that.
pub fn use_reveal(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let disposed = Arc::new(AtomicBool::new(false));
    {
        let disposed = Arc::clone(&disposed);
        on_cleanup(move || disposed.store(true, Ordering::Relaxed));
    }

    let mut attached = false;
    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if attached {
            return;
        }
        attached = true;

        let reveal = Rc::new(RefCell::new(Reveal::new(VISIBILITY_THRESHOLD)));
        let disposed = Arc::clone(&disposed);
        let state = Rc::clone(&reveal);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                if disposed.load(Ordering::Relaxed) {
                    observer.disconnect();
                    return;
                }
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if state.borrow_mut().on_visibility(entry.intersection_ratio()) {
                        set_revealed.try_set(true);
                        observer.disconnect();
                        return;
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                reveal.borrow_mut().observe();
                callback.forget();
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, showing content: {err:?}");
                set_revealed.try_set(true);
            }
        }
    });

    revealed
}
