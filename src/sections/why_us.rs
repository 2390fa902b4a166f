use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Benefit {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/001.png",
        title: "Step-by-Step Methodology",
        description: "Follow our proven framework designed for consistent results",
    },
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/02.png",
        title: "Proprietary Tools",
        description: "Institutional-grade tech to decode liquidity and high-probability zones",
    },
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/03.png",
        title: "Daily/Weekly Review",
        description: "Trade audits + weekly analytics (win rate, risk-reward) to refine your edge",
    },
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/04.png",
        title: "Community",
        description: "Collaborate with traders who speak your market language",
    },
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/05.png",
        title: "Live Trading",
        description: "Real-market execution: step-by-step entries, exits, and risk management under pressure",
    },
    Benefit {
        icon: "https://flowprinttrading.com/00-icons/06.png",
        title: "Continuous Evolution",
        description: "Strategy updates + new tools at no extra cost. Markets change; your edge won't stagnate",
    },
];

#[function_component(WhyUsSection)]
pub fn why_us_section() -> Html {
    html! {
        <section id="why-us" class="why-us-section">
            <div class="section-shell">
                <Reveal class="section-heading">
                    <h2>{"Why Choose Us?"}</h2>
                    <p>
                        {"We truly believe that here you are going to find everything you need \
                          to reach your trading goals"}
                    </p>
                </Reveal>

                <div class="benefit-grid">
                    {
                        for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                            <Reveal delay_ms={index as u32 * 100}>
                                <div class="benefit-card">
                                    <div class="benefit-icon levitating">
                                        <img src={benefit.icon} alt={benefit.title} loading="lazy" />
                                    </div>
                                    <h3>{ benefit.title }</h3>
                                    <p>{ benefit.description }</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .why-us-section {
                    padding: 8rem 0;
                    background: #111827;
                }
                .benefit-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .benefit-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .benefit-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .benefit-card {
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(31, 41, 55, 0.8);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .benefit-card:hover {
                    border-color: rgba(99, 102, 241, 0.3);
                    box-shadow: 0 0 35px rgba(99, 102, 241, 0.15);
                }
                .benefit-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: rgba(17, 24, 39, 0.9);
                    padding: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .benefit-icon img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .benefit-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.75rem;
                }
                .benefit-card p {
                    color: #9ca3af;
                    margin: 0;
                    transition: color 0.3s ease;
                }
                .benefit-card:hover p { color: #d1d5db; }
                "#}
            </style>
        </section>
    }
}
