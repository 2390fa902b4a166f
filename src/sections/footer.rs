use gloo_console::warn;
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics::AnalyticsClient;
use crate::components::reveal::{Reveal, RevealAnimation};
use crate::config;

/// Same acceptance rule the signup form has always used: no whitespace, one
/// `@` with a non-empty local part, and a dot inside the domain with at
/// least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Serialize)]
struct NewsletterSignup {
    email: String,
    fecha: String,
    fuente: &'static str,
}

#[derive(Clone, PartialEq)]
enum SignupStatus {
    Idle,
    Success(&'static str),
    Error(&'static str),
}

#[function_component(FooterSection)]
pub fn footer_section() -> Html {
    let email_ref = use_node_ref();
    let status = use_state(|| SignupStatus::Idle);
    let is_loading = use_state(|| false);
    let analytics = use_context::<AnalyticsClient>();

    let on_subscribe = {
        let email_ref = email_ref.clone();
        let status = status.clone();
        let is_loading = is_loading.clone();
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| {
            let input = match email_ref.cast::<HtmlInputElement>() {
                Some(input) => input,
                None => return,
            };
            let email = input.value().trim().to_string();

            if !is_valid_email(&email) {
                status.set(SignupStatus::Error("Please enter a valid email address"));
                return;
            }

            is_loading.set(true);
            status.set(SignupStatus::Idle);

            let status = status.clone();
            let is_loading = is_loading.clone();
            let analytics = analytics.clone();
            spawn_local(async move {
                let signup = NewsletterSignup {
                    email,
                    fecha: chrono::Utc::now().to_rfc3339(),
                    fuente: config::NEWSLETTER_SOURCE,
                };
                let response = match Request::post(config::NEWSLETTER_WEBHOOK_URL).json(&signup) {
                    Ok(request) => request.send().await,
                    Err(e) => Err(e),
                };
                match response {
                    Ok(response) if response.ok() => {
                        status.set(SignupStatus::Success("Thank you for subscribing!"));
                        input.set_value("");
                        if let Some(analytics) = &analytics {
                            analytics.track_event("newsletter_signup", "engagement", None, None);
                        }
                    }
                    Ok(response) => {
                        warn!("Newsletter webhook returned status", response.status());
                        status.set(SignupStatus::Error(
                            "There was an error subscribing. Please try again.",
                        ));
                    }
                    Err(e) => {
                        warn!("Newsletter webhook request failed:", e.to_string());
                        status.set(SignupStatus::Error(
                            "There was an error subscribing. Please try again.",
                        ));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let input_class = match *status {
        SignupStatus::Error(_) => "newsletter-input error",
        SignupStatus::Success(_) => "newsletter-input success",
        SignupStatus::Idle => "newsletter-input",
    };

    html! {
        <footer id="contact-footer" class="footer-section">
            <div class="section-shell">
                <div class="footer-columns">
                    <Reveal class="footer-column">
                        <div class="footer-brand">
                            <img
                                src="https://flowprinttrading.com/00-icons/logomenu00.png"
                                alt="FlowPrint Logo"
                                width="32"
                                height="32"
                            />
                            <span>{"FlowPrint"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Empowering traders with institutional-grade tools and education for \
                              consistent market success."}
                        </p>
                        <div class="footer-social">
                            <Reveal animation={RevealAnimation::ScaleUp} delay_ms={600}>
                                <a href="https://www.instagram.com/flowprinttrading" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"Instagram"}</a>
                            </Reveal>
                            <Reveal animation={RevealAnimation::ScaleUp} delay_ms={700}>
                                <a href="https://www.tiktok.com/@flowprint.trading" target="_blank" rel="noopener noreferrer" aria-label="TikTok">{"TikTok"}</a>
                            </Reveal>
                            <Reveal animation={RevealAnimation::ScaleUp} delay_ms={800}>
                                <a href="https://www.youtube.com/@FlowPrintTrading/" target="_blank" rel="noopener noreferrer" aria-label="YouTube">{"YouTube"}</a>
                            </Reveal>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={200} class="footer-column footer-links">
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            <li><a href="#why-us">{"Why Us?"}</a></li>
                            <li><a href="#bootcamp">{"Training"}</a></li>
                            <li><a href="#join-us">{"Join Us"}</a></li>
                            <li><a href="#testimonials">{"Testimonials"}</a></li>
                            <li><a href="#core-tools">{"Tools"}</a></li>
                        </ul>
                    </Reveal>

                    <Reveal delay_ms={400} class="footer-column footer-links">
                        <h3>{"Programs"}</h3>
                        <ul>
                            <li><a href="https://paypro.flowprinttrading.com/">{"Pro Program"}</a></li>
                            <li><a href="https://payelite.flowprinttrading.com/">{"Elite Plus"}</a></li>
                            <li><a href="https://paypro.flowprinttrading.com/" target="_blank" rel="noopener noreferrer">{"Members"}</a></li>
                            <li><a href="#core-tools">{"Trading Tools"}</a></li>
                        </ul>
                    </Reveal>

                    <Reveal delay_ms={600} class="footer-column footer-links">
                        <h3>{"Contact Us"}</h3>
                        <ul>
                            <li><a href="mailto:support@flowprinttrading.com">{"support@flowprinttrading.com"}</a></li>
                            <li><a href="tel:+34621295784">{"+34 621 29 57 84"}</a></li>
                            <li><span class="footer-address">{"C/ Acisclo Diaz nº 4, Murcia - Spain"}</span></li>
                            <li>
                                <a class="footer-whatsapp" href="https://wa.me/+34640050663" target="_blank" rel="noopener noreferrer">
                                    {"Chat on WhatsApp"}
                                </a>
                            </li>
                        </ul>
                    </Reveal>

                    <Reveal delay_ms={800} class="footer-column">
                        <h3>{"Newsletter"}</h3>
                        <p class="footer-blurb">
                            {"Subscribe to receive more trading insights, new strategies and \
                              market updates."}
                        </p>
                        <div class="newsletter-form">
                            <input
                                ref={email_ref}
                                type="email"
                                class={input_class}
                                placeholder="Enter your email"
                                disabled={*is_loading}
                            />
                            <button
                                class="newsletter-button"
                                type="button"
                                onclick={on_subscribe}
                                disabled={*is_loading}
                            >
                                { if *is_loading { "…" } else { "➤" } }
                            </button>
                        </div>
                        {
                            match *status {
                                SignupStatus::Success(message) => html! {
                                    <p class="newsletter-message success">{ message }</p>
                                },
                                SignupStatus::Error(message) => html! {
                                    <p class="newsletter-message error">{ message }</p>
                                },
                                SignupStatus::Idle => html! {},
                            }
                        }
                        <p class="newsletter-privacy">
                            {"We respect your privacy. Unsubscribe at any time."}
                        </p>
                    </Reveal>
                </div>

                <Reveal delay_ms={1000}>
                    <div class="footer-bottom">
                        <p>{"© 2025 FlowPrint Trading. All rights reserved."}</p>
                        <div class="footer-legal">
                            <a href="http://privacy.flowprinttrading.com">{"Privacy Policy"}</a>
                            <a href="http://cookies.flowprinttrading.com">{"Cookie Policy"}</a>
                            <a href="http://terms.flowprinttrading.com">{"Terms of Service"}</a>
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .footer-section {
                    background: #111827;
                    border-top: 1px solid #1f2937;
                    padding: 2rem 0;
                }
                .footer-columns {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 1024px) {
                    .footer-columns { grid-template-columns: repeat(5, 1fr); }
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }
                .footer-brand span {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }
                .footer-blurb {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0 0 1rem;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }
                .footer-social a {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s ease, transform 0.3s ease;
                }
                .footer-social a:hover {
                    color: #818cf8;
                    transform: scale(1.1);
                }
                .footer-column h3 {
                    color: #fff;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }
                .footer-links ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    text-decoration: none;
                    display: inline-block;
                    transition: color 0.2s ease, transform 0.2s ease;
                }
                .footer-links a:hover {
                    color: #818cf8;
                    transform: translateX(0.25rem);
                }
                .footer-address {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .footer-whatsapp {
                    display: inline-block;
                    background: #16a34a;
                    color: #fff !important;
                    padding: 0.375rem 0.75rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                }
                .footer-whatsapp:hover {
                    background: #15803d;
                    transform: translateY(-2px);
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                }
                .newsletter-input {
                    flex: 1;
                    min-width: 0;
                    height: 2.25rem;
                    border-radius: 0.375rem;
                    border: 1px solid #374151;
                    background: #1f2937;
                    color: #fff;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                }
                .newsletter-input::placeholder { color: #6b7280; }
                .newsletter-input.error { border-color: #ef4444; }
                .newsletter-input.success { border-color: #22c55e; }
                .newsletter-input:disabled { opacity: 0.5; cursor: not-allowed; }
                .newsletter-button {
                    height: 2.25rem;
                    padding: 0 1rem;
                    border: none;
                    border-radius: 0.375rem;
                    background: #4f46e5;
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .newsletter-button:hover:not(:disabled) {
                    background: #4338ca;
                    transform: translateY(-2px);
                }
                .newsletter-button:disabled {
                    background: #4b5563;
                    cursor: not-allowed;
                }
                .newsletter-message {
                    font-size: 0.875rem;
                    margin: 0 0 0.5rem;
                }
                .newsletter-message.success { color: #4ade80; }
                .newsletter-message.error { color: #f87171; }
                .newsletter-privacy {
                    color: #9ca3af;
                    font-size: 0.75rem;
                    margin: 0;
                }
                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .footer-bottom { flex-direction: row; }
                }
                .footer-bottom p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0;
                }
                .footer-legal {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .footer-legal a {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    text-decoration: none;
                }
                .footer-legal a:hover { color: #818cf8; }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn rejects_obviously_invalid_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("no-tld@domain"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("trailing-dot@domain."));
        assert!(!is_valid_email("leading-dot@.com"));
    }

    #[test]
    fn accepts_plausible_addresses() {
        assert!(is_valid_email("trader@example.com"));
        assert!(is_valid_email("first.last@sub.domain.co"));
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("tag+filter@mail.io"));
    }
}
