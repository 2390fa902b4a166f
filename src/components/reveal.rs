use yew::prelude::*;

use crate::hooks::use_visible::{use_visible, VisibleOptions};

/// Forward transition run when a revealed element reaches its resting state.
/// The pre-reveal state (zero opacity plus an offset transform) and the
/// shared transition CSS live in the app shell under the `.reveal` classes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAnimation {
    FadeUp,
    FadeDown,
    FadeIn,
    ScaleUp,
    SlideLeft,
    SlideRight,
}

impl RevealAnimation {
    fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-fade-up",
            Self::FadeDown => "reveal-fade-down",
            Self::FadeIn => "reveal-fade-in",
            Self::ScaleUp => "reveal-scale-up",
            Self::SlideLeft => "reveal-slide-left",
            Self::SlideRight => "reveal-slide-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(RevealAnimation::FadeUp)]
    pub animation: RevealAnimation,
    /// Stagger offset; siblings usually pass `index * 100` or `index * 200`.
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(700)]
    pub duration_ms: u32,
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or(true)]
    pub trigger_once: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let handle = use_visible(VisibleOptions {
        threshold: props.threshold,
        trigger_once: props.trigger_once,
        ..VisibleOptions::default()
    });

    let style = format!(
        "--reveal-delay: {}ms; --reveal-duration: {}ms;",
        props.delay_ms, props.duration_ms
    );

    html! {
        <div
            ref={handle.node_ref}
            class={classes!(
                "reveal",
                props.animation.class(),
                handle.visible.then_some("visible"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
