//! Viewport visibility tracking.
//!
//! `use_on_screen` tells a component whether an element it rendered is
//! currently inside the viewport, so reveal animations can be gated on
//! scroll position. The heavy lifting is done by the browser's
//! IntersectionObserver; `ViewportSubscription` wraps one observation and
//! tears it down on drop so a re-render or unmount never leaks the callback.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// How much of the element has to be visible before it counts as on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Fraction of the element's area, clamped to `[0, 1]` when subscribing.
    pub threshold: f64,
    /// Margin applied around the viewport, CSS margin syntax.
    pub root_margin: &'static str,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
        }
    }
}

impl ViewportConfig {
    fn effective_threshold(&self) -> f64 {
        self.threshold.clamp(0.0, 1.0)
    }
}

/// A live observation of one element. Dropping it disconnects the observer
/// and releases the callback, so no intersection change is ever delivered
/// after teardown.
pub struct ViewportSubscription {
    observer: IntersectionObserver,
    _on_change: Closure<dyn FnMut(js_sys::Array)>,
}

impl ViewportSubscription {
    /// Starts observing `element`, forwarding every platform-reported
    /// intersection change to `on_change` as it arrives. No coalescing.
    pub fn subscribe(
        element: &Element,
        config: &ViewportConfig,
        on_change: Callback<bool>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                on_change.emit(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.effective_threshold()));
        options.set_root_margin(config.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _on_change: callback,
        })
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reports whether the element behind `node` currently satisfies the
/// visibility threshold. Starts out `false`; if the ref is never attached to
/// a rendered element it stays `false`, which is not an error. The
/// observation is re-registered whenever the config changes and dropped with
/// the component.
#[hook]
pub fn use_on_screen(node: NodeRef, config: ViewportConfig) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, config): &(NodeRef, ViewportConfig)| {
                let on_change = Callback::from(move |intersecting| visible.set(intersecting));
                let subscription = node
                    .cast::<Element>()
                    .and_then(|element| {
                        ViewportSubscription::subscribe(&element, config, on_change).ok()
                    });
                move || drop(subscription)
            },
            (node, config),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped_to_unit_interval() {
        let too_high = ViewportConfig {
            threshold: 1.7,
            root_margin: "0px",
        };
        let too_low = ViewportConfig {
            threshold: -0.3,
            root_margin: "0px",
        };
        assert_eq!(too_high.effective_threshold(), 1.0);
        assert_eq!(too_low.effective_threshold(), 0.0);
    }

    #[test]
    fn default_config_observes_any_visible_pixel() {
        let config = ViewportConfig::default();
        assert_eq!(config.effective_threshold(), 0.0);
        assert_eq!(config.root_margin, "0px");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_element(tag: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element(tag).unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    async fn dropped_subscription_delivers_no_changes() {
        let element = body_element("div");
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let on_change = Callback::from(move |_| counter.set(counter.get() + 1));

        let subscription =
            ViewportSubscription::subscribe(&element, &ViewportConfig::default(), on_change)
                .unwrap();
        drop(subscription);

        // The initial intersection record is delivered asynchronously; after
        // a disconnect it must never arrive.
        gloo_timers::future::TimeoutFuture::new(100).await;
        assert_eq!(hits.get(), 0);
        element.remove();
    }

    #[wasm_bindgen_test]
    async fn live_subscription_reports_the_initial_state() {
        let element = body_element("div");
        let hits = Rc::new(Cell::new(0u32));
        let counter = hits.clone();
        let on_change = Callback::from(move |_| counter.set(counter.get() + 1));

        let _subscription =
            ViewportSubscription::subscribe(&element, &ViewportConfig::default(), on_change)
                .unwrap();

        gloo_timers::future::TimeoutFuture::new(100).await;
        assert_eq!(hits.get(), 1);
        element.remove();
    }

    #[function_component(DetachedHarness)]
    fn detached_harness() -> Html {
        // The ref is created but never attached to a rendered element.
        let never_attached = use_node_ref();
        let visible = use_on_screen(
            never_attached,
            ViewportConfig {
                threshold: 0.4,
                root_margin: "0px",
            },
        );
        html! { <span id="visible-flag">{ visible.to_string() }</span> }
    }

    #[wasm_bindgen_test]
    async fn unattached_ref_stays_invisible() {
        let root = body_element("div");
        yew::Renderer::<DetachedHarness>::with_root(root.clone()).render();
        gloo_timers::future::TimeoutFuture::new(100).await;

        let flag = root.query_selector("#visible-flag").unwrap().unwrap();
        assert_eq!(flag.text_content().unwrap(), "false");
        root.remove();
    }
}
