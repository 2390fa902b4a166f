use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::market::Quote;

#[derive(Properties, PartialEq)]
pub struct FinancialCardProps {
    pub quote: Quote,
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(FinancialCard)]
pub fn financial_card(props: &FinancialCardProps) -> Html {
    let quote = &props.quote;
    let change_class = if quote.is_positive() {
        "quote-change positive"
    } else {
        "quote-change negative"
    };
    let trend = if quote.is_positive() { "▲" } else { "▼" };

    html! {
        <Reveal delay_ms={props.delay_ms} class="quote-card-slot">
            <div class="quote-card">
                <div class="quote-card-head">
                    <h3>{ quote.name }</h3>
                    <p>{ quote.kind_label() }</p>
                </div>
                <div class="quote-card-body">
                    <div>
                        <p class="quote-price">{ quote.price_label() }</p>
                        <p class={change_class}>{ quote.change_label() }</p>
                    </div>
                    <span class={classes!("quote-trend", quote.is_positive().then_some("up"))}>
                        { trend }
                    </span>
                </div>
            </div>
        </Reveal>
    }
}
