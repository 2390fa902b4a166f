use gloo_timers::callback::Timeout;
use yew::prelude::*;

const WORDS: [&str; 4] = ["Profitable", "Disciplined", "Successful", "Professional"];

const HOLD_MS: u32 = 3_000;
const SWAP_MS: u32 = 500;

/// Rotating accent word in the hero headline. Even phases rest on a word,
/// odd phases run the swap animation before advancing to the next one.
#[function_component(AnimatedText)]
pub fn animated_text() -> Html {
    let phase = use_state(|| 0usize);

    {
        let phase = phase.clone();
        use_effect(move || {
            let delay = if *phase % 2 == 0 { HOLD_MS } else { SWAP_MS };
            let next = (*phase + 1) % (WORDS.len() * 2);
            let timeout = Timeout::new(delay, move || phase.set(next));
            move || drop(timeout)
        });
    }

    let word = WORDS[*phase / 2];
    let swapping = *phase % 2 == 1;

    let span_class = if swapping {
        "rotating-word swapping"
    } else {
        "rotating-word"
    };
    let width_style = format!("width: {:.1}em;", word.len() as f64 * 0.5);

    html! {
        <span class="rotating-word-slot" style={width_style}>
            <span class={span_class}>{ word }</span>
            <style>
                {r#"
                .rotating-word-slot {
                    position: relative;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    height: 1.2em;
                    min-width: 0.5em;
                    margin: 0 0.3em;
                    transition: width 0.5s ease-in-out;
                }
                .rotating-word {
                    position: absolute;
                    white-space: nowrap;
                    background: linear-gradient(90deg, #818cf8, #60a5fa, #8b5cf6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    transition: transform 0.5s ease-in-out, opacity 0.5s ease-in-out;
                }
                .rotating-word.swapping {
                    transform: translateY(100%);
                    opacity: 0;
                }
                "#}
            </style>
        </span>
    }
}
