/// Newsletter signups are relayed through a Make.com webhook; there is no
/// backend of our own.
pub const NEWSLETTER_WEBHOOK_URL: &str =
    "https://hook.eu2.make.com/v72cujbacfbd3thj8p6eh7vequbl7e2d";

/// Source label the webhook expects in the signup payload.
pub const NEWSLETTER_SOURCE: &str = "Página Web Flowprint";

#[cfg(debug_assertions)]
pub fn get_ga_measurement_id() -> &'static str {
    ""  // Analytics disabled when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_ga_measurement_id() -> &'static str {
    match option_env!("GA_MEASUREMENT_ID") {
        Some(id) => id,
        None => "",
    }
}
