use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

struct TrainingTrack {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    features: [&'static str; 4],
}

const TRAINING_TRACKS: [TrainingTrack; 2] = [
    TrainingTrack {
        title: "Theory Part",
        description: "Learn everything about order flow methodology, explained clearly and directly.",
        image: "https://flowprinttrading.com/00-icons/theory.avif",
        features: [
            "Advanced supply and demand",
            "Market auction theory",
            "Liquidity theory",
            "Advanced order flow tools",
        ],
    },
    TrainingTrack {
        title: "Practical Part",
        description: "Apply knowledge in real-time, with weekly recaps, end of the day and Q&A sessions.",
        image: "https://flowprinttrading.com/00-icons/practical.avif",
        features: [
            "Backtesting",
            "Practical exercises on zones and patterns",
            "Real Market Analysis",
            "Live Sessions",
        ],
    },
];

#[function_component(BootcampSection)]
pub fn bootcamp_section() -> Html {
    html! {
        <section id="bootcamp" class="bootcamp-section">
            <div class="section-shell">
                <Reveal class="section-heading">
                    <h2>{"About the Training"}</h2>
                    <p>{"A complete program designed to turn you into a professional trader."}</p>
                </Reveal>

                <div class="training-grid">
                    {
                        for TRAINING_TRACKS.iter().enumerate().map(|(index, track)| html! {
                            <Reveal delay_ms={index as u32 * 200}>
                                <div class="training-card">
                                    <div class="training-card-head">
                                        <div class="training-card-image levitating">
                                            <img src={track.image} alt={track.title} loading="lazy" />
                                        </div>
                                        <div>
                                            <h3>{ track.title }</h3>
                                            <p>{ track.description }</p>
                                        </div>
                                    </div>
                                    <div class="training-feature-list">
                                        {
                                            for track.features.iter().enumerate().map(|(i, feature)| html! {
                                                <Reveal
                                                    animation={RevealAnimation::SlideRight}
                                                    delay_ms={i as u32 * 100}
                                                >
                                                    <div class="training-feature">
                                                        <span class="training-feature-check">{"✓"}</span>
                                                        <span>{ *feature }</span>
                                                    </div>
                                                </Reveal>
                                            })
                                        }
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .bootcamp-section {
                    position: relative;
                    padding: 5rem 0;
                    background: #1f2937;
                    overflow: hidden;
                }
                .training-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .training-grid {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 3rem;
                    }
                }
                .training-card {
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(17, 24, 39, 0.6);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    transition: border-color 0.3s ease;
                }
                .training-card:hover {
                    border-color: rgba(99, 102, 241, 0.4);
                }
                .training-card-head {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .training-card-image {
                    flex-shrink: 0;
                    width: 5rem;
                    height: 5rem;
                    border-radius: 1rem;
                    background: rgba(17, 24, 39, 0.9);
                    padding: 0.75rem;
                }
                .training-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    filter: brightness(1.25);
                }
                .training-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                    background: linear-gradient(90deg, #fff, #c7d2fe);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .training-card-head p {
                    color: #9ca3af;
                    line-height: 1.6;
                    margin: 0;
                }
                .training-feature-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .training-feature {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #d1d5db;
                }
                .training-feature-check {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.75rem;
                    height: 1.75rem;
                    flex-shrink: 0;
                    border-radius: 9999px;
                    background: rgba(99, 102, 241, 0.1);
                    color: #818cf8;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
