use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::countdown::{self, TimeLeft};

const PRO_CHECKOUT_URL: &str =
    "https://5hcrp0-t3.myshopify.com/cart/54970224607614:1?channel=buy_button";
const ELITE_CHECKOUT_URL: &str =
    "https://5hcrp0-t3.myshopify.com/cart/54970327630206:1?channel=buy_button";
const PRO_CRYPTO_URL: &str = "https://paycryptopro.flowprinttrading.com/";
const ELITE_CRYPTO_URL: &str = "https://paycryptoelite.flowprinttrading.com/";

struct PlanGroup {
    heading: &'static str,
    items: &'static [&'static str],
}

struct Plan {
    name: &'static str,
    price: &'static str,
    audience: &'static str,
    note: Option<&'static str>,
    badge: Option<&'static str>,
    groups: &'static [PlanGroup],
    guarantee_heading: &'static str,
    guarantee: &'static str,
    cta: &'static str,
    checkout_url: &'static str,
    crypto_url: &'static str,
    featured: bool,
}

const PLANS: [Plan; 2] = [
    Plan {
        name: "Pro Program",
        price: "697€",
        audience: "Ideal For: Self-driven traders building foundational expertise.",
        note: None,
        badge: None,
        groups: &[
            PlanGroup {
                heading: "Full 2 month Live Mentorship",
                items: &[
                    "Live sessions + recordings (Phase 1 & 2)",
                    "Lifetime access to course updates",
                ],
            },
            PlanGroup {
                heading: "Prebuilt Tools & Resources",
                items: &[
                    "Proprietary indicators (supply/demand, delta divergence)",
                    "Prop Firm Challenge Bot (access granted post-development)",
                    "Trade Journal Template + Backtesting Spreadsheets",
                ],
            },
            PlanGroup {
                heading: "Community & Support",
                items: &[
                    "Private Discord community",
                    "Live Trades: Twice a week (possibly more)",
                    "Weekly market recaps + EOD reports",
                ],
            },
        ],
        guarantee_heading: "30-Day Guarantee",
        guarantee: "Full refund if unsatisfied after completing Weeks 1-3.",
        cta: "Get Started",
        checkout_url: PRO_CHECKOUT_URL,
        crypto_url: PRO_CRYPTO_URL,
        featured: false,
    },
    Plan {
        name: "Elite Plus Mentorship",
        price: "1497€",
        audience: "Ideal For: Traders committed to institutional-grade mastery.",
        note: Some("Interview Required"),
        badge: Some("Limited Seats: 10 Only"),
        groups: &[
            PlanGroup {
                heading: "Everything in Pro Program +",
                items: &[],
            },
            PlanGroup {
                heading: "6-Month Elite Mentorship",
                items: &[
                    "Daily Live Coaching: Pre-market analysis, live trade breakdowns, post-session debriefs",
                    "1:1 Biweekly Reviews: Personalized audits of trades, psychology, and strategy",
                ],
            },
            PlanGroup {
                heading: "Advanced Tools & Priority Access",
                items: &[
                    "Institutional Scripts (NT8/ATAS) for orderflow edge",
                    "Early Access to prop bot updates and proprietary tools",
                ],
            },
            PlanGroup {
                heading: "My Personal Playbook",
                items: &[
                    "Exact entry/exit rules",
                    "Pre-trade checklist for bulletproof execution",
                ],
            },
        ],
        guarantee_heading: "Performance-Based Refund",
        guarantee: "Partial refund available after 6 months if metrics stagnate.",
        cta: "Apply Now",
        checkout_url: ELITE_CHECKOUT_URL,
        crypto_url: ELITE_CRYPTO_URL,
        featured: true,
    },
];

fn plan_card(plan: &Plan) -> Html {
    html! {
        <div class={classes!("pricing-card", plan.featured.then_some("featured"))}>
            if let Some(badge) = plan.badge {
                <div class="pricing-badge">{ badge }</div>
            }
            <div class="pricing-card-body">
                <h3>{ plan.name }</h3>
                <div class="pricing-price">
                    <span>{ plan.price }</span>
                    <small>{"Excl. tax"}</small>
                </div>
                <p class="pricing-audience">{ plan.audience }</p>
                if let Some(note) = plan.note {
                    <p class="pricing-note">{ note }</p>
                }
                <div class="pricing-groups">
                    {
                        for plan.groups.iter().map(|group| html! {
                            <div class="pricing-group">
                                <h4>
                                    <span class="pricing-check levitating">{"✓"}</span>
                                    { group.heading }
                                </h4>
                                if !group.items.is_empty() {
                                    <ul>
                                        { for group.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                    </ul>
                                }
                            </div>
                        })
                    }
                    <div class="pricing-group">
                        <h4>
                            <span class="pricing-check levitating">{"✓"}</span>
                            { plan.guarantee_heading }
                        </h4>
                        <p class="pricing-guarantee">{ plan.guarantee }</p>
                    </div>
                </div>
            </div>
            <div class="pricing-card-footer">
                <a href={plan.checkout_url} class={classes!("pricing-cta", plan.featured.then_some("light"))}>
                    <span>{ plan.cta }</span>
                    <span class="pricing-cta-arrow">{"→"}</span>
                </a>
                <a href={plan.crypto_url} target="_blank" rel="noopener noreferrer" class="pricing-crypto">
                    {"₿ Pay with Crypto"}
                </a>
            </div>
        </div>
    }
}

fn time_unit(value: i64, label: &str) -> Html {
    html! {
        <div class="time-unit">
            <div class="time-unit-value">{ format!("{value:02}") }</div>
            <div class="time-unit-label">{ label }</div>
        </div>
    }
}

#[function_component(JoinUsSection)]
pub fn join_us_section() -> Html {
    let time_left = use_state(|| countdown::time_left(Date::now() as i64));
    let elapsed = use_state(|| countdown::elapsed_percent(Date::now() as i64));

    {
        let time_left = time_left.clone();
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                let tick = move || {
                    let now = Date::now() as i64;
                    time_left.set(countdown::time_left(now));
                    elapsed.set(countdown::elapsed_percent(now));
                };
                let interval = Interval::new(1_000, tick);
                move || drop(interval)
            },
            (),
        );
    }

    let TimeLeft { days, hours, minutes, seconds } = *time_left;
    let bar_style = format!("transform: translateX(-{}%);", 100.0 - *elapsed);

    html! {
        <section id="join-us" class="join-us-section">
            <div class="section-shell">
                <Reveal class="section-heading">
                    <h2>{"Join Us"}</h2>
                    <div class="founder-card">
                        <img
                            src="https://flowprinttrading.com/00-icons/ray.avif"
                            alt="Ray Hit TP"
                            loading="lazy"
                        />
                        <div>
                            <p class="founder-quote">
                                {"\"This isn't a marketing gimmick. As traders who value our \
                                  community, we've created a launch discount exclusively for our \
                                  loyal traders and those who've trusted us from the start. While \
                                  prices will adjust as we launch, we want to keep this phase \
                                  accessible to those who believe in our shared journey. Don't \
                                  miss this chance to lock in your spot with us.\""}
                            </p>
                            <p class="founder-name">{"- Ray Hit TP"}</p>
                        </div>
                    </div>
                </Reveal>

                <div class="pricing-grid">
                    {
                        for PLANS.iter().enumerate().map(|(index, plan)| html! {
                            <Reveal delay_ms={400 + index as u32 * 200}>
                                { plan_card(plan) }
                            </Reveal>
                        })
                    }
                </div>

                <Reveal delay_ms={800}>
                    <div class="timer-panel">
                        <div class="timer-intro">
                            <h2>{"⏱ Limited Time Offer:"}</h2>
                            <p>{"March 11, 2025"}</p>
                            <div class="timer-progress">
                                <div class="timer-progress-bar" style={bar_style}></div>
                            </div>
                        </div>
                        <div class="timer-units">
                            { time_unit(days, "Days") }
                            <span class="timer-colon">{":"}</span>
                            { time_unit(hours, "Hours") }
                            <span class="timer-colon">{":"}</span>
                            { time_unit(minutes, "Minutes") }
                            <span class="timer-colon">{":"}</span>
                            { time_unit(seconds, "Seconds") }
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .join-us-section {
                    position: relative;
                    padding: 5rem 0;
                    overflow: hidden;
                    background: #111827;
                }
                .founder-card {
                    max-width: 48rem;
                    margin: 0 auto;
                    background: rgba(31, 41, 55, 0.4);
                    backdrop-filter: blur(4px);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    text-align: left;
                }
                .founder-card img {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    border: 2px solid #6366f1;
                    flex-shrink: 0;
                }
                .founder-quote {
                    font-size: 1.125rem;
                    color: #d1d5db;
                    font-style: italic;
                    margin: 0;
                }
                .founder-name {
                    color: #818cf8;
                    font-weight: 600;
                    margin: 0.75rem 0 0;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    max-width: 64rem;
                    margin: 0 auto 2rem;
                }
                @media (min-width: 1024px) {
                    .pricing-grid { grid-template-columns: repeat(2, 1fr); }
                }
                .pricing-card {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    background: rgba(31, 41, 55, 0.5);
                    backdrop-filter: blur(4px);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #374151;
                    transition: border-color 0.3s ease;
                }
                .pricing-card:hover { border-color: rgba(99, 102, 241, 0.5); }
                .pricing-card.featured {
                    background: linear-gradient(135deg, rgba(49, 46, 129, 0.5), rgba(31, 41, 55, 0.5), rgba(17, 24, 39, 0.5));
                    border-color: rgba(99, 102, 241, 0.3);
                }
                .pricing-card.featured:hover { border-color: rgba(99, 102, 241, 0.6); }
                .pricing-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #4f46e5;
                    color: #fff;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    border: 1px solid #818cf8;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    white-space: nowrap;
                }
                .pricing-card-body { flex: 1; }
                .pricing-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .pricing-price {
                    display: flex;
                    align-items: baseline;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .pricing-price span {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #818cf8;
                }
                .pricing-price small {
                    color: #9ca3af;
                    font-size: 0.75rem;
                }
                .pricing-audience { color: #9ca3af; margin: 0; }
                .pricing-note {
                    color: #a5b4fc;
                    font-size: 0.875rem;
                    margin: 0.5rem 0 0;
                }
                .pricing-groups {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .pricing-group h4 {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                    margin: 0 0 1rem;
                }
                .pricing-check { color: #818cf8; }
                .pricing-group ul {
                    list-style: none;
                    margin: 0;
                    padding: 0 0 0 1.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #d1d5db;
                }
                .pricing-group ul li::before { content: "• "; }
                .pricing-guarantee {
                    color: #d1d5db;
                    margin: 0;
                    padding-left: 1.75rem;
                }
                .pricing-card-footer {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #374151;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .pricing-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #4f46e5;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 500;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .pricing-cta:hover {
                    background: #4338ca;
                    transform: translateY(-2px);
                }
                .pricing-cta.light {
                    background: #fff;
                    color: #111827;
                    font-weight: 600;
                }
                .pricing-cta.light:hover { background: #f3f4f6; }
                .pricing-crypto {
                    display: block;
                    text-align: center;
                    background: #1f2937;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid #374151;
                    text-decoration: none;
                    transition: border-color 0.2s ease;
                }
                .pricing-crypto:hover { border-color: #3b82f6; }
                .timer-panel {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    background: rgba(31, 41, 55, 0.4);
                    backdrop-filter: blur(4px);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(55, 65, 81, 0.5);
                }
                @media (min-width: 768px) {
                    .timer-panel { flex-direction: row; }
                }
                .timer-intro h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    margin: 0 0 0.5rem;
                }
                .timer-intro p {
                    color: #9ca3af;
                    margin: 0 0 0.25rem;
                }
                .timer-progress {
                    width: 12rem;
                    height: 0.25rem;
                    background: #1f2937;
                    border-radius: 9999px;
                    overflow: hidden;
                }
                .timer-progress-bar {
                    height: 100%;
                    background: #6366f1;
                    transition: transform 0.5s ease-out;
                }
                .timer-units {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .timer-colon {
                    color: #818cf8;
                    font-size: 2.25rem;
                    font-weight: 300;
                }
                @media (max-width: 639px) {
                    .timer-colon { display: none; }
                }
                .time-unit {
                    background: rgba(31, 41, 55, 0.8);
                    backdrop-filter: blur(4px);
                    padding: 1rem 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(99, 102, 241, 0.2);
                    min-width: 120px;
                    text-align: center;
                    transition: border-color 0.3s ease;
                }
                .time-unit:hover { border-color: rgba(99, 102, 241, 0.4); }
                .time-unit-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 0.25rem;
                }
                .time-unit-label {
                    color: #818cf8;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                "#}
            </style>
        </section>
    }
}
