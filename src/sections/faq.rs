use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 10] = [
    Faq {
        question: "What platforms do you work with?",
        answer: "The training is designed and optimized for ATAS, NinjaTrader, and SierraChart. \
                 Tools, scripts, and analysis run directly on these platforms—no additional \
                 setup required.",
    },
    Faq {
        question: "Which platforms support your proprietary indicators?",
        answer: "Our proprietary indicators are fully compatible with NinjaTrader 8 and ATAS. \
                 We provide detailed setup guides and support for both platforms.",
    },
    Faq {
        question: "Is the prop firm challenge bot ready?",
        answer: "The prop firm challenge bot is in final testing phase. Pro Program members will \
                 get access once it's released, while Elite Plus members get early access to \
                 beta versions and updates.",
    },
    Faq {
        question: "Do you offer payment plans?",
        answer: "Yes, we offer flexible payment plans for both programs. Contact our support \
                 team for details about installment options.",
    },
    Faq {
        question: "What support will I get after purchasing?",
        answer: "You'll get lifetime access to our Discord community, regular live sessions, \
                 weekly market recaps, and continuous updates. Elite Plus members also receive \
                 1:1 mentoring.",
    },
    Faq {
        question: "Can I watch the training sessions later?",
        answer: "Yes, all live sessions are recorded and available in your member area. You can \
                 review them anytime, ensuring you never miss important content.",
    },
    Faq {
        question: "How is this different from other trading courses?",
        answer: "We focus on practical application with real-time analysis, proprietary tools, \
                 and ongoing mentorship. Our approach combines institutional methods with \
                 retail-friendly execution.",
    },
    Faq {
        question: "Do I need to buy additional tools?",
        answer: "No additional purchases required beyond your chosen trading platform. All \
                 proprietary indicators and tools are included in your membership.",
    },
    Faq {
        question: "Do you have verifiable student results?",
        answer: "Yes, we maintain a transparent track record of student achievements, including \
                 funded accounts and consistent trading results. These are available upon \
                 request.",
    },
    Faq {
        question: "Why should I trust you?",
        answer: "Our track record, transparent approach, and community of successful traders \
                 speak for themselves. We're traders first, educators second, focusing on real \
                 results over marketing.",
    },
];

fn faq_item(index: usize, faq: &Faq, active: &UseStateHandle<Option<usize>>) -> Html {
    let is_open = **active == Some(index);
    let toggle = {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active.set(if *active == Some(index) { None } else { Some(index) });
        })
    };

    html! {
        <Reveal delay_ms={(index % 5) as u32 * 100}>
            <div class={classes!("faq-item", is_open.then_some("open"))}>
                <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                    <span>{ faq.question }</span>
                    <span class="faq-chevron">{"⌄"}</span>
                </button>
                <div class="faq-answer">
                    <p>{ faq.answer }</p>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    // At most one answer open at a time.
    let active = use_state(|| None::<usize>);
    let midpoint = FAQS.len().div_ceil(2);

    html! {
        <section id="frequently-asked-questions" class="faq-section">
            <div class="section-shell">
                <Reveal class="section-heading">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Everything you need to know before joining the program"}</p>
                </Reveal>

                <div class="faq-columns">
                    <div class="faq-column">
                        {
                            for FAQS.iter().take(midpoint).enumerate()
                                .map(|(index, faq)| faq_item(index, faq, &active))
                        }
                    </div>
                    <div class="faq-column">
                        {
                            for FAQS.iter().skip(midpoint).enumerate()
                                .map(|(offset, faq)| faq_item(midpoint + offset, faq, &active))
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 5rem 0;
                    background: #111827;
                }
                .faq-columns {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .faq-columns { grid-template-columns: repeat(2, 1fr); }
                }
                .faq-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .faq-item {
                    border: 1px solid #374151;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: rgba(31, 41, 55, 0.5);
                    transition: background 0.5s ease, transform 0.3s ease;
                }
                .faq-item:hover {
                    background: rgba(31, 41, 55, 0.7);
                    transform: translateY(-2px);
                }
                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                }
                .faq-chevron {
                    flex-shrink: 0;
                    color: #60a5fa;
                    transition: transform 0.5s ease;
                }
                .faq-item.open .faq-chevron {
                    transform: rotate(180deg);
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease-out, opacity 0.5s ease-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 20rem;
                    opacity: 1;
                }
                .faq-answer p {
                    padding: 0 1.5rem 1rem;
                    margin: 0;
                    color: #d1d5db;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
