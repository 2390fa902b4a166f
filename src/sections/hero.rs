use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::financial_slider::FinancialSlider;
use crate::components::image_carousel::ImageCarousel;
use crate::components::reveal::Reveal;

const CERTIFICATE_IMAGES: [&str; 7] = [
    "https://flowprinttrading.com/certificate/ft01.avif",
    "https://flowprinttrading.com/certificate/ft02.avif",
    "https://flowprinttrading.com/certificate/ft03.avif",
    "https://flowprinttrading.com/certificate/ft04.avif",
    "https://flowprinttrading.com/certificate/ft05.avif",
    "https://flowprinttrading.com/certificate/ft06.avif",
    "https://flowprinttrading.com/certificate/ft07.avif",
];

const TRADING_IMAGES: [&str; 8] = [
    "https://flowprinttrading.com/00-icons/1.avif",
    "https://flowprinttrading.com/00-icons/2.avif",
    "https://flowprinttrading.com/00-icons/3.avif",
    "https://flowprinttrading.com/00-icons/4.avif",
    "https://flowprinttrading.com/00-icons/5.avif",
    "https://flowprinttrading.com/00-icons/6.avif",
    "https://flowprinttrading.com/00-icons/7.avif",
    "https://flowprinttrading.com/00-icons/8.avif",
];

fn image_list(images: &[&'static str]) -> Vec<AttrValue> {
    images.iter().map(|src| AttrValue::from(*src)).collect()
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section id="home" class="hero-section">
            <div class="hero-backdrop"></div>
            <div class="hero-overlay"></div>

            <div class="hero-inner">
                <div class="hero-grid">
                    <Reveal delay_ms={200} class="hero-copy">
                        <h1>{"From Real Traders to Future CPTs"}</h1>
                        <div class="hero-tagline">
                            <span>{"Become a"}</span>
                            <AnimatedText />
                            <span>{"Trader"}</span>
                        </div>
                        <p>
                            {"by mastering a proven framework through our comprehensive training, \
                              proprietary tools, personalized mentorship, and a community of \
                              successful traders."}
                        </p>
                        <a href="#join-us" class="hero-cta" aria-label="Explore our trading program">
                            <span>{"Explore the Program"}</span>
                            <span class="hero-cta-arrow">{"›"}</span>
                        </a>
                    </Reveal>

                    <Reveal delay_ms={400} class="hero-carousels">
                        <ImageCarousel images={image_list(&CERTIFICATE_IMAGES)} reverse=true />
                        <ImageCarousel images={image_list(&TRADING_IMAGES)} />
                    </Reveal>
                </div>

                <div class="hero-ticker">
                    <FinancialSlider />
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100svh;
                    display: flex;
                    align-items: center;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    background-image: url("https://images.unsplash.com/photo-1642790106117-e829e14a795f?auto=format&fit=crop&q=80&w=1920");
                    background-position: center;
                    background-size: cover;
                    background-repeat: no-repeat;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(17, 24, 39, 0.95), rgba(49, 46, 129, 0.9), rgba(17, 24, 39, 0.95));
                }
                .hero-inner {
                    position: relative;
                    width: 100%;
                    max-width: 90rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 4rem;
                }
                .hero-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                @media (min-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                .hero-copy h1 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    line-height: 1.2;
                    color: #fff;
                    margin: 0 0 1.5rem;
                }
                .hero-tagline {
                    display: flex;
                    align-items: center;
                    white-space: nowrap;
                    font-size: clamp(1.25rem, 3vw, 1.875rem);
                    font-weight: 700;
                    color: #fff;
                    margin-bottom: 1.5rem;
                }
                .hero-copy p {
                    font-size: 1.0625rem;
                    line-height: 1.7;
                    color: #d1d5db;
                    max-width: 36rem;
                    margin: 0 0 1.5rem;
                }
                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #4f46e5;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.2s ease, background 0.2s ease, box-shadow 0.2s ease;
                }
                .hero-cta:hover {
                    background: #4338ca;
                    transform: translateY(-2px);
                    box-shadow: 0 10px 25px rgba(99, 102, 241, 0.25);
                }
                .hero-cta-arrow {
                    font-size: 1.25rem;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }
                .hero-carousels {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                @media (max-width: 767px) {
                    .hero-carousels { display: none; }
                }
                .hero-ticker {
                    margin-top: 2rem;
                    margin-bottom: -4rem;
                    position: relative;
                    z-index: 10;
                }
                "#}
            </style>
        </section>
    }
}
