use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

struct Tool {
    id: u32,
    title: &'static str,
    description: &'static str,
    glyph: &'static str,
}

const TOOLS: [Tool; 5] = [
    Tool {
        id: 1,
        title: "Market Profile",
        description: "Let's explore 2 methods to identify zones and levels you've never seen before",
        glyph: "📊",
    },
    Tool {
        id: 2,
        title: "VWAP",
        description: "With this volume tool, you'll learn to anticipate price explosions like never before",
        glyph: "📈",
    },
    Tool {
        id: 3,
        title: "Volume & Delta Analysis",
        description: "Confirm absorptions, exhaustion moves, and fade-aways in the footprint chart to track money flow in the market",
        glyph: "📶",
    },
    Tool {
        id: 4,
        title: "Footprint",
        description: "With this microscopic tool, validate and spot real-time movements of the market's \"big players\"",
        glyph: "👣",
    },
    Tool {
        id: 5,
        title: "Cumulative Delta",
        description: "Identify price divergences and confirm the strength (or lack of intent) of the market's \"whales\"",
        glyph: "⇅",
    },
];

#[function_component(CoreToolsSection)]
pub fn core_tools_section() -> Html {
    html! {
        <section id="core-tools" class="core-tools-section">
            <div class="section-shell">
                <Reveal animation={RevealAnimation::ScaleUp} class="section-heading">
                    <h2>{"Core Tools You Will Master"}</h2>
                    <p>
                        {"Master institutional accumulation/distribution zones and eliminate \
                          retail guesswork."}
                    </p>
                </Reveal>

                <div class="tool-row">
                    {
                        for TOOLS.iter().enumerate().map(|(index, tool)| html! {
                            <Reveal delay_ms={index as u32 * 200} class="tool-slot">
                                <div class="tool-card">
                                    <div class="tool-dot">
                                        <span>{ tool.id }</span>
                                    </div>
                                    <div class="tool-icon levitating">
                                        <span>{ tool.glyph }</span>
                                    </div>
                                    <h3>{ tool.title }</h3>
                                    <p>{ tool.description }</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .core-tools-section {
                    padding: 5rem 0;
                    background: #111827;
                }
                .tool-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.25rem;
                    justify-content: center;
                }
                .tool-slot {
                    width: 100%;
                }
                @media (min-width: 1024px) {
                    .tool-slot { width: calc(20% - 1rem); }
                }
                .tool-card {
                    position: relative;
                    height: 100%;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(31, 41, 55, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    transition: transform 0.5s ease, border-color 0.5s ease;
                }
                .tool-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(59, 130, 246, 0.4);
                }
                .tool-dot {
                    position: absolute;
                    top: -0.75rem;
                    left: 1.25rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    background: #3b82f6;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .tool-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.1);
                    box-shadow: inset 0 0 0 1px rgba(59, 130, 246, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    margin-bottom: 1.5rem;
                }
                .tool-card h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.75rem;
                }
                .tool-card p {
                    font-size: 0.9375rem;
                    color: #9ca3af;
                    line-height: 1.6;
                    margin: 0;
                    overflow-wrap: break-word;
                }
                "#}
            </style>
        </section>
    }
}
