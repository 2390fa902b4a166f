use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod consent;
mod countdown;
mod market;

mod hooks {
    pub mod use_market_feed;
    pub mod use_visible;
}

mod components {
    pub mod animated_text;
    pub mod cookie_banner;
    pub mod financial_card;
    pub mod financial_slider;
    pub mod image_carousel;
    pub mod reveal;
}

mod sections {
    pub mod bootcamp;
    pub mod chase;
    pub mod comparison;
    pub mod core_tools;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod join_us;
    pub mod journey;
    pub mod results;
    pub mod testimonials;
    pub mod why_us;
}

use analytics::AnalyticsClient;
use components::cookie_banner::CookieBanner;
use sections::{
    bootcamp::BootcampSection, chase::ChaseSection, comparison::ComparisonSection,
    core_tools::CoreToolsSection, faq::FaqSection, footer::FooterSection, hero::HeroSection,
    join_us::JoinUsSection, journey::JourneySection, results::ResultsSection,
    testimonials::TestimonialsSection, why_us::WhyUsSection,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Fixed header that slides out of view while scrolling down and back in on
/// any upward scroll (always shown near the top of the page).
#[function_component(Header)]
fn header() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let last_scroll = std::cell::Cell::new(0.0_f64);

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(window) = web_sys::window() {
                        if let Ok(current) = window.scroll_y() {
                            visible.set(current < last_scroll.get() || current < 100.0);
                            last_scroll.set(current);
                        }
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("top-header", (!*visible).then_some("hidden"))}>
            <div class="top-header-inner">
                <a href="#home" class="top-header-logo">
                    <img
                        src="https://flowprinttrading.com/00-icons/logomenu00.png"
                        alt="FlowPrint Logo"
                        width="32"
                        height="32"
                    />
                    <span>{"FlowPrint"}</span>
                </a>

                <nav class="top-header-nav">
                    <a href="#why-us">{"Why Us?"}</a>
                    <a href="#bootcamp">{"Training"}</a>
                    <a href="#join-us" class="accent">{"Join Us"}</a>
                    <a href="#core-tools">{"Tools"}</a>
                    <a href="#testimonials">{"Testimonials"}</a>
                </nav>

                <div class="top-header-actions">
                    <a
                        href="https://es.flowprinttrading.com/"
                        class="top-header-lang"
                        aria-label="Versión en Español"
                    >
                        {"ES"}
                    </a>
                    <a href="#join-us" class="top-header-cta">{"Join Us"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(Home)]
fn home() -> Html {
    html! {
        <main>
            <HeroSection />
            <WhyUsSection />
            <BootcampSection />
            <JourneySection />
            <CoreToolsSection />
            <JoinUsSection />
            <ComparisonSection />
            <TestimonialsSection />
            <ResultsSection />
            <FaqSection />
            <ChaseSection />
            <FooterSection />
        </main>
    }
}

#[function_component]
fn App() -> Html {
    // One analytics handle for the whole tree; components get it via
    // context rather than poking at window globals.
    let client = use_state(|| AnalyticsClient::init(consent::load().as_ref()));

    html! {
        <BrowserRouter>
            <ContextProvider<AnalyticsClient> context={(*client).clone()}>
                <style>{ GLOBAL_CSS }</style>
                <Header />
                <Switch<Route> render={switch} />
                <CookieBanner />
            </ContextProvider<AnalyticsClient>>
        </BrowserRouter>
    }
}

/// Base styles plus the reveal contract shared by every section: elements
/// start transparent and offset, then transition forward once their
/// visibility trigger adds the `visible` class.
const GLOBAL_CSS: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    background: #111827;
    color: #d1d5db;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
html { scroll-behavior: smooth; }

.section-shell {
    position: relative;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}
.section-heading h2 {
    font-size: 2.25rem;
    font-weight: 700;
    color: #fff;
    margin: 0 0 1rem;
}
.section-heading p {
    font-size: 1.25rem;
    color: rgba(199, 210, 254, 0.9);
    max-width: 42rem;
    margin: 0 auto;
}

.reveal {
    opacity: 0;
    transition:
        opacity var(--reveal-duration, 700ms) cubic-bezier(0.4, 0, 0.2, 1) var(--reveal-delay, 0ms),
        transform var(--reveal-duration, 700ms) cubic-bezier(0.4, 0, 0.2, 1) var(--reveal-delay, 0ms);
    will-change: opacity, transform;
}
.reveal-fade-up { transform: translateY(2rem); }
.reveal-fade-down { transform: translateY(-2rem); }
.reveal-scale-up { transform: scale(0.95); }
.reveal-slide-left { transform: translateX(-30px); }
.reveal-slide-right { transform: translateX(30px); }
.reveal.visible {
    opacity: 1;
    transform: none;
}

.levitating {
    animation: levitate 3s ease-in-out infinite;
}
@keyframes levitate {
    0%, 100% { transform: translateY(0) scale(1); }
    50% { transform: translateY(-4px) scale(1.02); }
}

.top-header {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    background: rgba(17, 24, 39, 0.8);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid #1f2937;
    transition: transform 0.3s ease;
}
.top-header.hidden { transform: translateY(-100%); }
.top-header-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.top-header-logo {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    text-decoration: none;
    transition: transform 0.2s ease;
}
.top-header-logo:hover { transform: scale(1.05); }
.top-header-logo span {
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
}
.top-header-nav {
    display: none;
    gap: 2rem;
}
@media (min-width: 1024px) {
    .top-header-nav { display: flex; }
}
.top-header-nav a {
    color: #d1d5db;
    text-decoration: none;
    transition: color 0.2s ease, transform 0.2s ease;
}
.top-header-nav a:hover {
    color: #818cf8;
    transform: scale(1.05);
}
.top-header-nav a.accent {
    color: #818cf8;
    font-weight: 500;
}
.top-header-actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.top-header-lang {
    color: #d1d5db;
    font-size: 0.75rem;
    font-weight: 600;
    text-decoration: none;
    padding: 0.375rem;
    border-radius: 0.5rem;
    transition: background 0.2s ease;
}
.top-header-lang:hover { background: rgba(31, 41, 55, 0.5); }
.top-header-cta {
    background: #4f46e5;
    color: #fff;
    padding: 0.5rem 1.5rem;
    border-radius: 0.5rem;
    text-decoration: none;
    transition: background 0.2s ease, transform 0.2s ease, box-shadow 0.2s ease;
}
.top-header-cta:hover {
    background: #4338ca;
    transform: scale(1.05);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}

@media (prefers-reduced-motion: reduce) {
    html { scroll-behavior: auto; }
    .reveal {
        transition: none;
        opacity: 1;
        transform: none;
    }
    .levitating { animation: none; }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
