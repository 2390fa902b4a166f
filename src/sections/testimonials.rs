use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sebastian Jancoski",
        role: "Professional trader and my mentor",
        image: "https://flowprinttrading.com/00-icons/testimonials01.jpg",
        quote: "Wow, Indeed student became better than old teacher. Congratulations my friend. \
                I am so proud that you didn't give up and now you reached the sky.",
    },
    Testimonial {
        name: "Michael Slovak",
        role: "Funded Trader",
        image: "https://flowprinttrading.com/00-icons/testimonials02.jpg",
        quote: "Man, I've never seen anyone like you before, I really appreciate your approach \
                and how you do things, and also how much you've helped me... you're just the boss.",
    },
    Testimonial {
        name: "Sam",
        role: "Independent Trader",
        image: "https://flowprinttrading.com/00-icons/testimonials03.jpg",
        quote: "I already knew how to trade in the markets, but the academy helped me identify \
                patterns and use tools that improved my accuracy. They explain everything in a \
                clear and practical way.",
    },
];

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-shell">
                <Reveal class="section-heading">
                    <h2>{"What Our Traders Say"}</h2>
                    <p>{"Vibes That Make Us Smile: Heartfelt Words From Our Traders, and Ex-Mentor"}</p>
                </Reveal>

                <div class="testimonial-grid">
                    {
                        for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <Reveal delay_ms={index as u32 * 200}>
                                <div class="testimonial-card">
                                    <div class="testimonial-head">
                                        <img src={testimonial.image} alt={testimonial.name} loading="lazy" />
                                        <div>
                                            <h3>{ testimonial.name }</h3>
                                            <p>{ testimonial.role }</p>
                                        </div>
                                    </div>
                                    <span class="testimonial-mark">{"❝"}</span>
                                    <p class="testimonial-quote">{ testimonial.quote }</p>
                                    <div class="testimonial-stars" aria-label="5 out of 5 stars">
                                        {"★★★★★"}
                                    </div>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .testimonials-section {
                    padding: 5rem 0;
                    background: #111827;
                }
                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .testimonial-card {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    background: #1f2937;
                    padding: 2rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .testimonial-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(99, 102, 241, 0.3);
                    box-shadow: 0 0 25px rgba(99, 102, 241, 0.1);
                }
                .testimonial-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .testimonial-head img {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    flex-shrink: 0;
                }
                .testimonial-head h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                    margin: 0;
                }
                .testimonial-head p {
                    color: #818cf8;
                    margin: 0;
                }
                .testimonial-mark {
                    color: #818cf8;
                    font-size: 2rem;
                    line-height: 1;
                    margin-bottom: 1rem;
                }
                .testimonial-quote {
                    color: #d1d5db;
                    line-height: 1.7;
                    margin: 0 0 1.5rem;
                    flex-grow: 1;
                }
                .testimonial-stars {
                    color: #facc15;
                    letter-spacing: 0.2em;
                    margin-top: auto;
                }
                "#}
            </style>
        </section>
    }
}
