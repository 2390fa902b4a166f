use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

const RESULT_IMAGES: [&str; 21] = [
    "https://flowprinttrading.com/tests/pb01.avif",
    "https://flowprinttrading.com/tests/ft01.avif",
    "https://flowprinttrading.com/tests/1.avif",
    "https://flowprinttrading.com/tests/pb02.avif",
    "https://flowprinttrading.com/tests/pb03.avif",
    "https://flowprinttrading.com/tests/2.avif",
    "https://flowprinttrading.com/tests/ft02.avif",
    "https://flowprinttrading.com/tests/ft03.avif",
    "https://flowprinttrading.com/tests/3.avif",
    "https://flowprinttrading.com/tests/pb04.avif",
    "https://flowprinttrading.com/tests/pb05.avif",
    "https://flowprinttrading.com/tests/4.avif",
    "https://flowprinttrading.com/tests/ft04.avif",
    "https://flowprinttrading.com/tests/ft05.avif",
    "https://flowprinttrading.com/tests/5.avif",
    "https://flowprinttrading.com/tests/pb06.avif",
    "https://flowprinttrading.com/tests/6.avif",
    "https://flowprinttrading.com/tests/7.avif",
    "https://flowprinttrading.com/tests/ft06.avif",
    "https://flowprinttrading.com/tests/ft07.avif",
    "https://flowprinttrading.com/tests/8.avif",
];

const SCROLL_TICK_MS: u32 = 30;

#[derive(Properties, PartialEq)]
struct ImageModalProps {
    src: AttrValue,
    on_close: Callback<()>,
}

#[function_component(ImageModal)]
fn image_modal(props: &ImageModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="result-modal" onclick={on_backdrop.clone()}>
            <div class="result-modal-frame" onclick={swallow}>
                <button class="result-modal-close" onclick={on_backdrop} aria-label="Close modal">
                    {"✕"}
                </button>
                <img src={props.src.clone()} alt="Trader result" />
            </div>
        </div>
    }
}

#[function_component(ResultsSection)]
pub fn results_section() -> Html {
    let strip_ref = use_node_ref();
    let selected = use_state(|| None::<AttrValue>);

    {
        let strip_ref = strip_ref.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(SCROLL_TICK_MS, move || {
                    if let Some(strip) = strip_ref.cast::<Element>() {
                        let max_scroll = strip.scroll_width() - strip.client_width();
                        let next = strip.scroll_left() + 1;
                        strip.set_scroll_left(if next >= max_scroll { 0 } else { next });
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id="traders-results" class="results-section">
            <div class="results-backdrop"></div>
            <div class="results-overlay"></div>

            <div class="section-shell">
                <Reveal animation={RevealAnimation::FadeIn} class="section-heading">
                    <h2>{"Our Traders' Results"}</h2>
                </Reveal>

                <div ref={strip_ref} class="results-strip">
                    <div class="results-row">
                        {
                            for RESULT_IMAGES.iter().chain(RESULT_IMAGES.iter()).map(|src| {
                                let onclick = {
                                    let selected = selected.clone();
                                    let src = AttrValue::from(*src);
                                    Callback::from(move |_: MouseEvent| selected.set(Some(src.clone())))
                                };
                                html! {
                                    <div class="results-frame" {onclick}>
                                        <img src={*src} alt="" loading="lazy" draggable="false" />
                                    </div>
                                }
                            })
                        }
                    </div>
                </div>
            </div>

            if let Some(src) = (*selected).clone() {
                <ImageModal {src} on_close={on_close} />
            }

            <style>
                {r#"
                .results-section {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .results-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url("https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?auto=format&fit=crop&q=80&w=1920");
                    background-size: cover;
                    background-position: center;
                }
                .results-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(17, 24, 39, 0.95), rgba(17, 24, 39, 0.9), rgba(17, 24, 39, 0.95));
                }
                .results-strip {
                    position: relative;
                    overflow: hidden;
                    background: rgba(17, 24, 39, 0.5);
                    backdrop-filter: blur(4px);
                    padding: 3rem 0;
                }
                .results-row {
                    display: flex;
                    gap: 1rem;
                    min-width: max-content;
                }
                .results-frame {
                    position: relative;
                    flex: none;
                    width: 18rem;
                    height: 12rem;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .results-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.9);
                    transition: filter 0.3s ease, transform 0.3s ease;
                }
                .results-frame:hover img {
                    filter: brightness(1);
                    transform: scale(1.05);
                }
                .result-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                }
                .result-modal-frame {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .result-modal-frame img {
                    display: block;
                    width: 100%;
                    height: auto;
                }
                .result-modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    z-index: 10;
                    background: rgba(17, 24, 39, 0.8);
                    color: #fff;
                    border: none;
                    cursor: pointer;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                }
                "#}
            </style>
        </section>
    }
}
