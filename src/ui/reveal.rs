//! Scroll-triggered reveal wrapper
//!
//! `<Reveal>` renders its children hidden and fades them in the first time
//! they scroll into view. The one-shot logic lives in
//! [`RevealController`](crate::core::reveal::RevealController); this module
//! only adapts the browser's `IntersectionObserver` to it.

use leptos::html;
use leptos::prelude::*;

use crate::core::reveal::RevealOptions;

/// Content block that animates in once when scrolled into view
#[component]
pub fn Reveal(
    /// Transition delay, for staggering siblings
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes for the wrapper
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let options = RevealOptions {
        delay_ms,
        ..RevealOptions::default()
    };
    let revealed = RwSignal::new(false);
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "csr")]
    browser::watch(node_ref, options, revealed);

    view! {
        <div
            node_ref=node_ref
            class=format!("animate-reveal {}", class)
            class:is-visible=move || revealed.get()
            style=options.transition_style()
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
mod browser {
    use leptos::html;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::reveal::{
        IntersectionSample, RevealController, RevealOptions, RevealTransition, VisibilityObserver,
    };

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// `IntersectionObserver` bound to a single element
    pub struct BrowserObserver {
        observer: IntersectionObserver,
        target: web_sys::Element,
        _callback: EntriesCallback,
    }

    impl VisibilityObserver for BrowserObserver {
        fn observe(&mut self) {
            self.observer.observe(&self.target);
        }

        fn unobserve(&mut self) {
            self.observer.unobserve(&self.target);
        }

        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }

    type Slot = StoredValue<Option<RevealController<BrowserObserver>>, LocalStorage>;

    /// Attach an observer once the element is mounted; disconnect on cleanup
    pub fn watch(node_ref: NodeRef<html::Div>, options: RevealOptions, revealed: RwSignal<bool>) {
        let slot: Slot = StoredValue::new_local(None);

        Effect::new(move |_| {
            let Some(div) = node_ref.get() else {
                return;
            };
            if slot.with_value(|controller| controller.is_some()) {
                return;
            }

            match connect(web_sys::Element::from(div), options, slot, revealed) {
                Ok(mut controller) => {
                    controller.start();
                    slot.set_value(Some(controller));
                }
                Err(err) => {
                    // Without an observer the content would never appear
                    tracing::warn!("IntersectionObserver unavailable: {err:?}");
                    revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            slot.update_value(|controller| {
                if let Some(controller) = controller.as_mut() {
                    controller.teardown();
                }
            });
        });
    }

    fn connect(
        target: web_sys::Element,
        options: RevealOptions,
        slot: Slot,
        revealed: RwSignal<bool>,
    ) -> Result<RevealController<BrowserObserver>, JsValue> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    let transition = slot
                        .try_update_value(|controller| {
                            controller.as_mut().map(|c| c.on_intersection(sample))
                        })
                        .flatten();
                    if transition == Some(RevealTransition::Revealed) {
                        revealed.set(true);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(RevealController::new(
            BrowserObserver {
                observer,
                target,
                _callback: callback,
            },
            options,
        ))
    }
}
