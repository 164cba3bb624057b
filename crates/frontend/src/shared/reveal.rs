//! Reveal-on-scroll animation hook.
//!
//! Pages mark elements with `data-reveal`; once such an element intersects
//! the viewport it receives the `is-visible` class and the stylesheet plays
//! the entrance transition. Observation stops when the page is cleaned up.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const REVEAL_THRESHOLD: f64 = 0.16;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

/// Observe every `[data-reveal]` element on the current page. Call once from
/// the page component; runs after the initial render.
pub fn observe_reveals() {
    Effect::new(move |_| {
        let Ok(nodes) = document().query_selector_all("[data-reveal]") else {
            return;
        };
        if nodes.length() == 0 {
            return;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_1("is-visible");
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) else {
            return;
        };

        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                observer.observe(&element);
            }
        }

        // The callback has to outlive this scope for the observer to fire.
        callback.forget();

        on_cleanup(move || observer.disconnect());
    });
}
