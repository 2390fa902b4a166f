use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::components::financial_card::FinancialCard;
use crate::hooks::use_market_feed::use_market_feed;

const AUTO_SCROLL_TICK_MS: u32 = 30;

/// Auto-scrolling strip of mock quote cards under the hero. The feed hook
/// owns the refresh interval; this component owns the scroll interval.
#[function_component(FinancialSlider)]
pub fn financial_slider() -> Html {
    let quotes = use_market_feed();
    let strip_ref = use_node_ref();

    {
        let strip_ref = strip_ref.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(AUTO_SCROLL_TICK_MS, move || {
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

    html! {
        <div class="financial-slider">
            <div ref={strip_ref} class="financial-slider-track">
                <div class="financial-slider-row">
                    {
                        for quotes.iter().enumerate().map(|(index, quote)| html! {
                            <FinancialCard
                                key={quote.symbol}
                                quote={quote.clone()}
                                delay_ms={index as u32 * 100}
                            />
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .financial-slider {
                    position: relative;
                    overflow: hidden;
                }
                .financial-slider-track {
                    overflow: hidden;
                    pointer-events: none;
                    mask-image: linear-gradient(to right, transparent, black 5%, black 95%, transparent);
                    -webkit-mask-image: linear-gradient(to right, transparent, black 5%, black 95%, transparent);
                }
                .financial-slider-row {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0 2rem;
                    min-width: max-content;
                }
                .quote-card-slot {
                    flex-shrink: 0;
                }
                .quote-card {
                    width: 220px;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: rgba(31, 41, 55, 0.8);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .quote-card:hover {
                    border-color: rgba(99, 102, 241, 0.3);
                    box-shadow: 0 0 35px rgba(99, 102, 241, 0.15);
                }
                .quote-card-head h3 {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.125rem;
                }
                .quote-card-head p {
                    font-size: 0.75rem;
                    color: rgba(199, 210, 254, 0.7);
                    margin: 0 0 0.5rem;
                }
                .quote-card-body {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .quote-price {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0;
                }
                .quote-change {
                    font-size: 0.75rem;
                    margin: 0;
                }
                .quote-change.positive { color: #4ade80; }
                .quote-change.negative { color: #f87171; }
                .quote-trend {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: rgba(17, 24, 39, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ef4444;
                    font-size: 0.8rem;
                }
                .quote-trend.up { color: #22c55e; }
                "#}
            </style>
        </div>
    }
}
