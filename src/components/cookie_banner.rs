use web_sys::js_sys::Date;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics::AnalyticsClient;
use crate::consent::{self, ConsentRecord};

#[derive(Clone, Copy, PartialEq)]
enum BannerView {
    Hidden,
    Summary,
    Preferences,
}

/// Consent banner. Hidden when a stored record exists and parses; anything
/// else (no cookie, malformed JSON) shows the summary bar with every
/// optional category off.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let view = use_state(|| BannerView::Hidden);
    let draft = use_state(ConsentRecord::denied);
    let client = use_context::<AnalyticsClient>();

    {
        let view = view.clone();
        let draft = draft.clone();
        let client = client.clone();
        use_effect_with_deps(
            move |_| {
                match consent::load() {
                    Some(record) => {
                        if let Some(client) = client {
                            client.update_consent(record.analytics);
                        }
                        draft.set(record);
                    }
                    None => view.set(BannerView::Summary),
                }
                || ()
            },
            (),
        );
    }

    let save = {
        let view = view.clone();
        let draft = draft.clone();
        let client = client.clone();
        Callback::from(move |record: ConsentRecord| {
            consent::store(&record);
            if let Some(client) = &client {
                client.update_consent(record.analytics);
            }
            draft.set(record);
            view.set(BannerView::Hidden);
        })
    };

    let on_accept_all = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| {
            save.emit(ConsentRecord::accept_all(Date::now() as i64));
        })
    };

    let on_save_preferences = {
        let save = save.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let record = ConsentRecord {
                timestamp: Date::now() as i64,
                ..(*draft).clone()
            };
            save.emit(record);
        })
    };

    let on_open_preferences = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(BannerView::Preferences))
    };

    let on_cancel = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(BannerView::Summary))
    };

    let toggle = |field: fn(&mut ConsentRecord, bool)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut record = (*draft).clone();
                field(&mut record, input.checked());
                draft.set(record);
            }
        })
    };

    let body = match *view {
        BannerView::Hidden => return html! {},
        BannerView::Summary => html! {
            <div class="cookie-summary">
                <p>
                    {"We use cookies to enhance your browsing experience, serve personalized \
                      content, and analyze our traffic. By clicking \"Accept All\", you consent \
                      to our use of cookies."}
                </p>
                <div class="cookie-summary-actions">
                    <button class="cookie-link-button" onclick={on_open_preferences}>
                        {"Cookie Settings"}
                    </button>
                    <button class="cookie-primary-button" onclick={on_accept_all}>
                        {"Accept All"}
                    </button>
                </div>
            </div>
        },
        BannerView::Preferences => html! {
            <div class="cookie-preferences">
                <div class="cookie-preferences-head">
                    <h3>{"Cookie Preferences"}</h3>
                    <button class="cookie-close-button" onclick={on_cancel.clone()} aria-label="Close">
                        {"✕"}
                    </button>
                </div>
                <div class="cookie-toggle-list">
                    <div class="cookie-toggle-row">
                        <div>
                            <p class="cookie-toggle-name">{"Necessary Cookies"}</p>
                            <p class="cookie-toggle-note">{"Required for the website to function properly."}</p>
                        </div>
                        <input type="checkbox" checked=true disabled=true />
                    </div>
                    <div class="cookie-toggle-row">
                        <div>
                            <p class="cookie-toggle-name">{"Analytics Cookies"}</p>
                            <p class="cookie-toggle-note">{"Help us improve our website by collecting anonymous usage data."}</p>
                        </div>
                        <input
                            type="checkbox"
                            checked={draft.analytics}
                            onchange={toggle(|record, on| record.analytics = on)}
                        />
                    </div>
                    <div class="cookie-toggle-row">
                        <div>
                            <p class="cookie-toggle-name">{"Marketing Cookies"}</p>
                            <p class="cookie-toggle-note">{"Allow us to provide personalized content and ads."}</p>
                        </div>
                        <input
                            type="checkbox"
                            checked={draft.marketing}
                            onchange={toggle(|record, on| record.marketing = on)}
                        />
                    </div>
                    <div class="cookie-toggle-row">
                        <div>
                            <p class="cookie-toggle-name">{"Preference Cookies"}</p>
                            <p class="cookie-toggle-note">{"Remember your settings and preferences."}</p>
                        </div>
                        <input
                            type="checkbox"
                            checked={draft.preferences}
                            onchange={toggle(|record, on| record.preferences = on)}
                        />
                    </div>
                </div>
                <div class="cookie-preferences-actions">
                    <button class="cookie-link-button" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="cookie-primary-button" onclick={on_save_preferences}>
                        {"Save Preferences"}
                    </button>
                </div>
            </div>
        },
    };

    html! {
        <div class="cookie-banner">
            { body }
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    z-index: 60;
                    padding: 1rem;
                    background: rgba(17, 24, 39, 0.95);
                    backdrop-filter: blur(4px);
                    border-top: 1px solid #1f2937;
                }
                .cookie-summary {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .cookie-summary p {
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin: 0;
                    max-width: 48rem;
                }
                .cookie-summary-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    flex-shrink: 0;
                }
                .cookie-link-button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #818cf8;
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .cookie-link-button:hover { color: #a5b4fc; }
                .cookie-primary-button {
                    background: #4f46e5;
                    color: #fff;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: background 0.2s ease;
                }
                .cookie-primary-button:hover { background: #4338ca; }
                .cookie-preferences {
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .cookie-preferences-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 1rem;
                }
                .cookie-preferences-head h3 {
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0;
                }
                .cookie-close-button {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #9ca3af;
                    font-size: 1rem;
                }
                .cookie-close-button:hover { color: #fff; }
                .cookie-toggle-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .cookie-toggle-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .cookie-toggle-name {
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin: 0;
                }
                .cookie-toggle-note {
                    color: #9ca3af;
                    font-size: 0.75rem;
                    margin: 0;
                }
                .cookie-toggle-row input[type="checkbox"] {
                    width: 2.25rem;
                    height: 1.25rem;
                    accent-color: #4f46e5;
                    cursor: pointer;
                }
                .cookie-toggle-row input[type="checkbox"]:disabled {
                    cursor: not-allowed;
                }
                .cookie-preferences-actions {
                    display: flex;
                    justify-content: flex-end;
                    gap: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
