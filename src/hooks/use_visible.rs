use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibleOptions {
    pub threshold: f64,
    pub root_margin: String,
    /// Detach the observation after the first crossing into view; `visible`
    /// never reverts to false afterwards.
    pub trigger_once: bool,
}

impl Default for VisibleOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

#[derive(Clone)]
pub struct UseVisibleHandle {
    pub node_ref: NodeRef,
    pub visible: bool,
}

/// Tracks whether the element behind `node_ref` has entered the viewport.
/// Without a target element the hook is a no-op; the underlying observer is
/// disconnected when the component unmounts.
#[hook]
pub fn use_visible(options: VisibleOptions) -> UseVisibleHandle {
    let node_ref = use_node_ref();
    let visible = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &VisibleOptions| {
                let trigger_once = options.trigger_once;
                let mut observation = None;

                if let Some(target) = node_ref.cast::<Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let entry = entries
                                .get(0)
                                .dyn_into::<IntersectionObserverEntry>()
                                .ok();
                            if let Some(entry) = entry {
                                if entry.is_intersecting() {
                                    visible.set(true);
                                    if trigger_once {
                                        observer.unobserve(&entry.target());
                                    }
                                } else if !trigger_once {
                                    visible.set(false);
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(options.threshold));
                    init.set_root_margin(&options.root_margin);

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        observer.observe(&target);
                        observation = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, callback)) = observation {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            options,
        );
    }

    UseVisibleHandle {
        node_ref,
        visible: *visible,
    }
}
