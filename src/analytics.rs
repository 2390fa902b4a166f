use gloo_console::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Function, Object, Reflect};
use web_sys::HtmlScriptElement;

use crate::config;
use crate::consent::{self, ConsentRecord};

/// Handle to the Google Analytics tag. Components receive this through
/// context instead of reaching for `window.gtag` themselves; a missing
/// measurement ID yields a disabled handle whose methods are no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsClient {
    measurement_id: &'static str,
}

impl AnalyticsClient {
    /// Loads the gtag.js snippet, seeds `dataLayer`/`gtag` and pushes the
    /// default consent state derived from the stored record.
    pub fn init(record: Option<&ConsentRecord>) -> Self {
        let measurement_id = config::get_ga_measurement_id();
        if measurement_id.is_empty() {
            warn!("Google Analytics measurement ID is not set");
            return Self { measurement_id: "" };
        }

        let client = Self { measurement_id };
        let analytics_granted = record.map(|r| r.analytics).unwrap_or(false);

        client.inject_loader();
        client.seed_gtag();

        client.gtag(&Array::of2(
            &JsValue::from_str("js"),
            &Date::new_0().into(),
        ));

        let defaults = Object::new();
        set_entry(&defaults, "analytics_storage", storage_flag(analytics_granted));
        set_entry(&defaults, "ad_storage", "denied");
        set_entry(&defaults, "functionality_storage", "denied");
        set_entry(&defaults, "personalization_storage", "denied");
        set_entry(&defaults, "security_storage", "granted");
        client.gtag(&Array::of3(
            &JsValue::from_str("consent"),
            &JsValue::from_str("default"),
            &defaults.into(),
        ));

        let settings = Object::new();
        if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
            set_entry(&settings, "page_path", &path);
        }
        let _ = Reflect::set(
            &settings,
            &JsValue::from_str("send_page_view"),
            &JsValue::from_bool(analytics_granted),
        );
        client.gtag(&Array::of3(
            &JsValue::from_str("config"),
            &JsValue::from_str(measurement_id),
            &settings.into(),
        ));

        client
    }

    /// Pushes a consent update for the analytics category.
    pub fn update_consent(&self, granted: bool) {
        if self.measurement_id.is_empty() {
            return;
        }
        let update = Object::new();
        set_entry(&update, "analytics_storage", storage_flag(granted));
        self.gtag(&Array::of3(
            &JsValue::from_str("consent"),
            &JsValue::from_str("update"),
            &update.into(),
        ));
    }

    /// Reports a custom event, but only when the persisted consent grants
    /// the analytics category.
    pub fn track_event(&self, action: &str, category: &str, label: Option<&str>, value: Option<f64>) {
        if self.measurement_id.is_empty() {
            return;
        }
        let granted = consent::load().map(|r| r.analytics).unwrap_or(false);
        if !granted {
            return;
        }
        let params = Object::new();
        set_entry(&params, "event_category", category);
        if let Some(label) = label {
            set_entry(&params, "event_label", label);
        }
        if let Some(value) = value {
            let _ = Reflect::set(
                &params,
                &JsValue::from_str("value"),
                &JsValue::from_f64(value),
            );
        }
        self.gtag(&Array::of3(
            &JsValue::from_str("event"),
            &JsValue::from_str(action),
            &params.into(),
        ));
    }

    fn inject_loader(&self) {
        let document = match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document,
            None => return,
        };
        let script = document
            .create_element("script")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok());
        if let (Some(script), Some(head)) = (script, document.head()) {
            script.set_src(&format!(
                "https://www.googletagmanager.com/gtag/js?id={}",
                self.measurement_id
            ));
            let _ = script.set_attribute("async", "");
            let _ = head.append_child(&script);
        }
    }

    fn seed_gtag(&self) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let data_layer = Reflect::get(&window, &JsValue::from_str("dataLayer"))
            .ok()
            .filter(|v| !v.is_undefined());
        if data_layer.is_none() {
            let _ = Reflect::set(
                &window,
                &JsValue::from_str("dataLayer"),
                &Array::new().into(),
            );
        }
        let gtag = Function::new_no_args("window.dataLayer.push(arguments);");
        let _ = Reflect::set(&window, &JsValue::from_str("gtag"), &gtag.into());
    }

    fn gtag(&self, args: &Array) {
        if let Some(window) = web_sys::window() {
            if let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) {
                if let Ok(gtag) = gtag.dyn_into::<Function>() {
                    let _ = gtag.apply(&JsValue::NULL, args);
                }
            }
        }
    }
}

fn storage_flag(granted: bool) -> &'static str {
    if granted {
        "granted"
    } else {
        "denied"
    }
}

fn set_entry(target: &Object, key: &str, value: &str) {
    let _ = Reflect::set(
        target,
        &JsValue::from_str(key),
        &JsValue::from_str(value),
    );
}
