use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

#[function_component(ChaseSection)]
pub fn chase_section() -> Html {
    html! {
        <section class="chase-section">
            <div class="chase-blob chase-blob-top"></div>
            <div class="chase-blob chase-blob-bottom"></div>

            <div class="chase-inner">
                <Reveal>
                    <h2>{"Let's Cut to the Chase 🤝"}</h2>
                </Reveal>
                <Reveal animation={RevealAnimation::SlideLeft} delay_ms={200}>
                    <p>
                        {"This is a validated, step-by-step framework we use ourselves to pass \
                          challenges and stay consistent. We didn't invent anything new; the \
                          market was already there. After years of obsessive backtesting, we \
                          combined everything that worked from every method or theory, identified \
                          repeating price action and footprint patterns, and built tools to spot \
                          them effortlessly in real time streamlining our decision-making."}
                    </p>
                </Reveal>
                <Reveal animation={RevealAnimation::SlideRight} delay_ms={400}>
                    <p>
                        {"We're proud of what we are (TRADERS), so I'll be straight with you. No \
                          fluff. No secrets. This is the system that would've saved me 7 years of \
                          trial and error. We've never shared it before, but if you're ready to \
                          stop getting lost in the noise and trade with clarity, here it is."}
                    </p>
                </Reveal>
                <Reveal delay_ms={600}>
                    <a href="#join-us" class="chase-cta">
                        <span>{"See you inside"}</span>
                        <span>{"→"}</span>
                    </a>
                </Reveal>
            </div>

            <style>
                {r#"
                .chase-section {
                    position: relative;
                    padding: 5rem 0;
                    background: #312e81;
                    overflow: hidden;
                }
                .chase-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }
                .chase-blob-top {
                    top: 0;
                    left: 0;
                    background: rgba(99, 102, 241, 0.1);
                }
                .chase-blob-bottom {
                    bottom: 0;
                    right: 0;
                    background: rgba(129, 140, 248, 0.1);
                }
                .chase-inner {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .chase-inner h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 1.5rem;
                }
                .chase-inner p {
                    font-size: 1.25rem;
                    color: #c7d2fe;
                    line-height: 1.7;
                    margin: 0 0 2rem;
                }
                .chase-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #fff;
                    color: #312e81;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
                }
                .chase-cta:hover {
                    background: #eef2ff;
                    transform: translateY(-4px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                "#}
            </style>
        </section>
    }
}
