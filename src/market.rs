//! Mock market data for the hero ticker. Prices are perturbed around a fixed
//! seed table on every refresh; change figures always derive from the seed
//! baseline, not from the previous tick. This is a placeholder feed, not a
//! market-data integration.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuoteKind {
    Index,
    Forex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    pub symbol: &'static str,
    pub name: &'static str,
    pub kind: QuoteKind,
    pub current_price: f64,
    pub change: f64,
    pub percent_change: f64,
}

pub struct SeedQuote {
    pub symbol: &'static str,
    pub name: &'static str,
    pub kind: QuoteKind,
    pub price: f64,
}

pub const INDEX_SEEDS: [SeedQuote; 5] = [
    SeedQuote { symbol: "^GSPC", name: "S&P 500", kind: QuoteKind::Index, price: 4927.93 },
    SeedQuote { symbol: "^DJI", name: "Dow Jones", kind: QuoteKind::Index, price: 38654.42 },
    SeedQuote { symbol: "^IXIC", name: "NASDAQ", kind: QuoteKind::Index, price: 15628.95 },
    SeedQuote { symbol: "^FTSE", name: "FTSE 100", kind: QuoteKind::Index, price: 7615.54 },
    SeedQuote { symbol: "^N225", name: "Nikkei 225", kind: QuoteKind::Index, price: 36158.02 },
];

pub const FOREX_SEEDS: [SeedQuote; 5] = [
    SeedQuote { symbol: "EURUSD", name: "EUR/USD", kind: QuoteKind::Forex, price: 1.0785 },
    SeedQuote { symbol: "GBPUSD", name: "GBP/USD", kind: QuoteKind::Forex, price: 1.2635 },
    SeedQuote { symbol: "USDJPY", name: "USD/JPY", kind: QuoteKind::Forex, price: 148.35 },
    SeedQuote { symbol: "AUDUSD", name: "AUD/USD", kind: QuoteKind::Forex, price: 0.6525 },
    SeedQuote { symbol: "USDCAD", name: "USD/CAD", kind: QuoteKind::Forex, price: 1.3465 },
];

pub const INDEX_JITTER_RANGE: f64 = 0.001;
pub const FOREX_JITTER_RANGE: f64 = 0.0005;
pub const REFRESH_INTERVAL_MS: u32 = 2_000;

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Bounded multiplicative jitter: for `r` in `[0, 1)` the result stays
/// within `seed_price ± seed_price * range`, rounded to four decimals.
pub fn perturb(seed_price: f64, range: f64, r: f64) -> f64 {
    let variation = (r - 0.5) * 2.0 * range * seed_price;
    round_to(seed_price + variation, 4)
}

fn generate(seed: &SeedQuote, r: f64) -> Quote {
    let (range, change_decimals) = match seed.kind {
        QuoteKind::Index => (INDEX_JITTER_RANGE, 2),
        QuoteKind::Forex => (FOREX_JITTER_RANGE, 4),
    };
    let current_price = perturb(seed.price, range, r);
    let change = current_price - seed.price;
    Quote {
        symbol: seed.symbol,
        name: seed.name,
        kind: seed.kind,
        current_price,
        change: round_to(change, change_decimals),
        percent_change: round_to(change / seed.price * 100.0, 2),
    }
}

/// Regenerates the full display list, indices and forex pairs interleaved,
/// drawing one `[0, 1)` sample per quote from `rand01`.
pub fn regenerate(mut rand01: impl FnMut() -> f64) -> Vec<Quote> {
    let mut quotes = Vec::with_capacity(INDEX_SEEDS.len() + FOREX_SEEDS.len());
    for (index_seed, forex_seed) in INDEX_SEEDS.iter().zip(FOREX_SEEDS.iter()) {
        quotes.push(generate(index_seed, rand01()));
        quotes.push(generate(forex_seed, rand01()));
    }
    quotes
}

impl Quote {
    pub fn is_positive(&self) -> bool {
        self.percent_change >= 0.0
    }

    pub fn price_label(&self) -> String {
        match self.kind {
            QuoteKind::Index => format!("${:.2}", self.current_price),
            QuoteKind::Forex => format!("{:.4}", self.current_price),
        }
    }

    pub fn change_label(&self) -> String {
        let sign = if self.is_positive() { "+" } else { "" };
        match self.kind {
            QuoteKind::Index => format!(
                "{sign}{:.2} ({sign}{:.2}%)",
                self.change, self.percent_change
            ),
            QuoteKind::Forex => format!(
                "{sign}{:.4} ({sign}{:.2}%)",
                self.change, self.percent_change
            ),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            QuoteKind::Index => "Stock Index",
            QuoteKind::Forex => "Currency Pair",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_within_a_tenth_of_a_percent() {
        let seed = 4927.93;
        for r in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 0.999_999] {
            let price = perturb(seed, INDEX_JITTER_RANGE, r);
            assert!(
                (price - seed).abs() <= 4.93,
                "r={r}: {price} strayed from {seed}"
            );
        }
    }

    #[test]
    fn midpoint_sample_leaves_the_seed_untouched() {
        assert_eq!(perturb(4927.93, INDEX_JITTER_RANGE, 0.5), 4927.93);
        assert_eq!(perturb(1.0785, FOREX_JITTER_RANGE, 0.5), 1.0785);
    }

    #[test]
    fn change_derives_from_the_seed_baseline() {
        let quote = generate(&INDEX_SEEDS[0], 1.0);
        let expected_price = perturb(4927.93, INDEX_JITTER_RANGE, 1.0);
        assert_eq!(quote.current_price, expected_price);
        assert_eq!(quote.change, round_to(expected_price - 4927.93, 2));
        assert_eq!(
            quote.percent_change,
            round_to((expected_price - 4927.93) / 4927.93 * 100.0, 2)
        );
    }

    #[test]
    fn regenerate_interleaves_indices_and_pairs() {
        let quotes = regenerate(|| 0.5);
        assert_eq!(quotes.len(), 10);
        assert_eq!(quotes[0].symbol, "^GSPC");
        assert_eq!(quotes[1].symbol, "EURUSD");
        assert_eq!(quotes[8].symbol, "^N225");
        assert_eq!(quotes[9].symbol, "USDCAD");
    }

    #[test]
    fn index_quotes_format_as_dollars() {
        let quote = generate(&INDEX_SEEDS[0], 0.5);
        assert_eq!(quote.price_label(), "$4927.93");
        assert_eq!(quote.change_label(), "+0.00 (+0.00%)");
        assert_eq!(quote.kind_label(), "Stock Index");
    }

    #[test]
    fn forex_quotes_format_with_four_decimals() {
        let quote = generate(&FOREX_SEEDS[0], 0.5);
        assert_eq!(quote.price_label(), "1.0785");
        assert_eq!(quote.kind_label(), "Currency Pair");
    }

    #[test]
    fn negative_moves_carry_their_own_sign() {
        let quote = generate(&INDEX_SEEDS[0], 0.0);
        assert!(!quote.is_positive());
        assert!(quote.change_label().starts_with('-'));
        assert!(!quote.change_label().contains('+'));
    }
}
