use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

struct JourneyPhase {
    phase: u32,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const JOURNEY_PHASES: [JourneyPhase; 3] = [
    JourneyPhase {
        phase: 1,
        title: "Foundation Building",
        description: "Master the fundamentals of the market dynamic and order flow.",
        features: [
            "Understanding our market framework",
            "Getting an Edge",
            "Changing your market mindset",
            "Developing your trading plan",
        ],
    },
    JourneyPhase {
        phase: 2,
        title: "Strategy Implementation",
        description: "Apply concepts in live market conditions with expert guidance",
        features: [
            "Knowing your statistical advantage",
            "Learning the execution timing",
            "Risk management implementation for funding and personal capital",
            "Applying a journal tracks stats and emotions to boost performance",
        ],
    },
    JourneyPhase {
        phase: 3,
        title: "Elite Performance",
        description: "Achieve mastery in trading with high-level strategies and elite skill development",
        features: [
            "Building a sustainable trading routine",
            "Enhancing decision-making under pressure",
            "Utilizing market correlations and multi-timeframe analysis",
            "Perfecting post-trade analysis and performance review",
        ],
    },
];

#[function_component(JourneySection)]
pub fn journey_section() -> Html {
    html! {
        <section class="journey-section">
            <div class="journey-blob journey-blob-top"></div>
            <div class="journey-blob journey-blob-bottom"></div>

            <div class="section-shell">
                <Reveal animation={RevealAnimation::ScaleUp} class="section-heading">
                    <h2>{"Your Journey to Trading Mastery With Us"}</h2>
                    <p>
                        {"A structured path to transform you from a beginner to a professional \
                          trader through our comprehensive program"}
                    </p>
                </Reveal>

                <div class="journey-list">
                    {
                        for JOURNEY_PHASES.iter().enumerate().map(|(index, phase)| html! {
                            <Reveal
                                animation={RevealAnimation::SlideRight}
                                delay_ms={index as u32 * 200}
                            >
                                <div class="journey-row">
                                    <div class="journey-circle">
                                        <span>{ format!("Phase {}", phase.phase) }</span>
                                    </div>
                                    <div class="journey-card">
                                        <h3>{ phase.title }</h3>
                                        <p>{ phase.description }</p>
                                        <div class="journey-feature-grid">
                                            {
                                                for phase.features.iter().enumerate().map(|(i, feature)| html! {
                                                    <Reveal delay_ms={400 + i as u32 * 100}>
                                                        <div class="journey-feature">
                                                            <span class="journey-feature-check">{"✓"}</span>
                                                            <span>{ *feature }</span>
                                                        </div>
                                                    </Reveal>
                                                })
                                            }
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .journey-section {
                    position: relative;
                    min-height: 100vh;
                    padding: 6rem 0;
                    background: linear-gradient(135deg, #312e81, #111827, #1f2937);
                    overflow: hidden;
                }
                .journey-blob {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 9999px;
                    background: rgba(99, 102, 241, 0.1);
                    filter: blur(64px);
                    animation: journey-blob 7s ease-in-out infinite;
                }
                .journey-blob-top {
                    top: 0;
                    left: 0;
                    transform: translate(-50%, -50%);
                }
                .journey-blob-bottom {
                    bottom: 0;
                    right: 0;
                    transform: translate(50%, 50%);
                    animation-delay: 2s;
                }
                @keyframes journey-blob {
                    0%, 100% { scale: 1; }
                    50% { scale: 1.1; }
                }
                .journey-list {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .journey-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                @media (min-width: 640px) {
                    .journey-row {
                        flex-direction: row;
                        align-items: flex-start;
                        gap: 2rem;
                    }
                }
                .journey-circle {
                    flex-shrink: 0;
                    width: 7rem;
                    height: 7rem;
                    border-radius: 9999px;
                    background: rgba(79, 70, 229, 0.1);
                    border: 2px solid #6366f1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 600;
                    text-align: center;
                }
                .journey-card {
                    flex-grow: 1;
                    width: 100%;
                    background: rgba(31, 41, 55, 0.5);
                    backdrop-filter: blur(4px);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(99, 102, 241, 0.2);
                }
                .journey-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .journey-card > p {
                    font-size: 1.125rem;
                    color: #c7d2fe;
                    margin: 0 0 1.5rem;
                }
                .journey-feature-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1rem;
                }
                @media (min-width: 640px) {
                    .journey-feature-grid { grid-template-columns: repeat(2, 1fr); }
                }
                .journey-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #d1d5db;
                }
                .journey-feature-check {
                    color: #818cf8;
                    flex-shrink: 0;
                }
                "#}
            </style>
        </section>
    }
}
