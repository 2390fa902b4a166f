use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealAnimation};

enum Tier {
    Missing,
    Offered(&'static str),
}

struct ComparisonRow {
    title: &'static str,
    pro: Tier,
    elite: Tier,
}

const ROWS: [ComparisonRow; 6] = [
    ComparisonRow {
        title: "Mentorship Duration",
        pro: Tier::Offered("2 Months"),
        elite: Tier::Offered("14 Months (2+12)"),
    },
    ComparisonRow {
        title: "Live Coaching",
        pro: Tier::Offered("2x/week"),
        elite: Tier::Offered("Daily"),
    },
    ComparisonRow {
        title: "Personalized Feedback",
        pro: Tier::Missing,
        elite: Tier::Offered("Biweekly 1:1"),
    },
    ComparisonRow {
        title: "Prop Bot Access",
        pro: Tier::Offered("Post-development"),
        elite: Tier::Offered("Priority + Early"),
    },
    ComparisonRow {
        title: "Premium Resources",
        pro: Tier::Missing,
        elite: Tier::Offered("Elite Playbook"),
    },
    ComparisonRow {
        title: "Mentoring",
        pro: Tier::Offered("Group"),
        elite: Tier::Offered("One to one"),
    },
];

fn tier_cell(tier: &Tier) -> Html {
    match tier {
        Tier::Missing => html! { <span class="tier-missing">{"✕ No"}</span> },
        Tier::Offered(detail) => html! { <span class="tier-offered">{ *detail }</span> },
    }
}

#[function_component(ComparisonSection)]
pub fn comparison_section() -> Html {
    html! {
        <section class="comparison-section">
            <div class="comparison-backdrop"></div>
            <div class="section-shell">
                <Reveal animation={RevealAnimation::FadeDown} class="section-heading">
                    <h2>{"Compare the Programs"}</h2>
                    <p>{"Side by side, so you know exactly what each path includes"}</p>
                </Reveal>

                <Reveal delay_ms={200}>
                    <div class="comparison-table">
                        <div class="comparison-row comparison-head">
                            <span>{"Feature"}</span>
                            <span>{"Pro Program"}</span>
                            <span>{"Elite Plus"}</span>
                        </div>
                        {
                            for ROWS.iter().map(|row| html! {
                                <div class="comparison-row">
                                    <span class="comparison-feature">{ row.title }</span>
                                    { tier_cell(&row.pro) }
                                    { tier_cell(&row.elite) }
                                </div>
                            })
                        }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .comparison-section {
                    position: relative;
                    padding: 5rem 0;
                    background: #1f2937;
                    overflow: hidden;
                }
                .comparison-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url("https://flowprinttrading.com/00-icons/fondo33.avif");
                    background-size: cover;
                    background-position: center;
                    opacity: 0.08;
                }
                .comparison-table {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    border-radius: 1rem;
                    overflow: hidden;
                    background: rgba(17, 24, 39, 0.7);
                    backdrop-filter: blur(4px);
                }
                .comparison-row {
                    display: grid;
                    grid-template-columns: 1.4fr 1fr 1fr;
                    gap: 1rem;
                    padding: 1rem 1.5rem;
                    align-items: center;
                    border-bottom: 1px solid rgba(55, 65, 81, 0.4);
                }
                .comparison-row:last-child { border-bottom: none; }
                .comparison-head {
                    background: rgba(49, 46, 129, 0.4);
                    color: #c7d2fe;
                    font-weight: 600;
                }
                .comparison-feature { color: #fff; font-weight: 500; }
                .tier-offered { color: #d1d5db; }
                .tier-missing { color: #6b7280; }
                @media (max-width: 639px) {
                    .comparison-row {
                        grid-template-columns: 1fr 1fr 1fr;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        font-size: 0.875rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
