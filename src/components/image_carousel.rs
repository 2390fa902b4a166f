use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

const SCROLL_TICK_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: Vec<AttrValue>,
    /// Scroll right-to-left instead of left-to-right.
    #[prop_or_default]
    pub reverse: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Continuously auto-scrolling image strip. The image list is rendered
/// twice so the wraparound jump lands on identical content.
#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let strip_ref = use_node_ref();

    {
        let strip_ref = strip_ref.clone();
        use_effect_with_deps(
            move |reverse: &bool| {
                let reverse = *reverse;
                let interval = Interval::new(SCROLL_TICK_MS, move || {
                    if let Some(strip) = strip_ref.cast::<Element>() {
                        let max_scroll = strip.scroll_width() - strip.client_width();
                        if reverse {
                            let next = strip.scroll_left() - 1;
                            strip.set_scroll_left(if next <= 0 { max_scroll } else { next });
                        } else {
                            let next = strip.scroll_left() + 1;
                            strip.set_scroll_left(if next >= max_scroll { 0 } else { next });
                        }
                    }
                });
                move || drop(interval)
            },
            props.reverse,
        );
    }

    html! {
        <div class={classes!("image-carousel", props.class.clone())}>
            <div class="image-carousel-fade"></div>
            <div ref={strip_ref} class="image-carousel-strip">
                {
                    for props.images.iter().chain(props.images.iter()).map(|src| html! {
                        <div class="image-carousel-frame">
                            <img src={src.clone()} alt="Trading scene" loading="lazy" draggable="false" />
                        </div>
                    })
                }
            </div>
            <style>
                {r#"
                .image-carousel {
                    position: relative;
                    width: 100%;
                    overflow: hidden;
                    background: rgba(17, 24, 39, 0.5);
                    backdrop-filter: blur(4px);
                    padding: 0.75rem 0;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }
                .image-carousel-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, #111827, transparent 15%, transparent 85%, #111827);
                    z-index: 10;
                    pointer-events: none;
                }
                .image-carousel-strip {
                    display: flex;
                    gap: 0.75rem;
                    overflow-x: hidden;
                }
                .image-carousel-frame {
                    position: relative;
                    flex: none;
                    width: 12rem;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 0.5rem;
                }
                .image-carousel-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: brightness(0.9);
                    transition: filter 0.3s ease, transform 0.3s ease;
                }
                .image-carousel-frame:hover img {
                    filter: brightness(1);
                    transform: scale(1.05);
                }
                @media (max-width: 768px) {
                    .image-carousel-frame {
                        width: 9rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
