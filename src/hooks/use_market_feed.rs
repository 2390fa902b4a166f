use gloo_timers::callback::Interval;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::market::{self, Quote, REFRESH_INTERVAL_MS};

/// Republishes the full mock quote list on a fixed interval. The list is
/// empty until the first tick fires on mount; the interval is dropped with
/// the owning component.
#[hook]
pub fn use_market_feed() -> Vec<Quote> {
    let quotes = use_state(Vec::new);

    {
        let quotes = quotes.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || quotes.set(market::regenerate(|| Math::random()));
                update();
                let interval = Interval::new(REFRESH_INTERVAL_MS, update);
                move || drop(interval)
            },
            (),
        );
    }

    (*quotes).clone()
}
