use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Directory the page fragments are served from, relative to the site root.
pub fn pages_dir() -> &'static str {
    "pages"
}

pub fn home_page() -> &'static str {
    "home"
}

/// Number the contact link opens a WhatsApp chat with.
pub fn whatsapp_number() -> &'static str {
    "27659019828"
}

/// Delay between mounting a fragment and running the reveal pass.
pub const REVEAL_DELAY_MS: u32 = 100;

/// Fraction of a card that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const CONFETTI_COUNT: usize = 20;
pub const CONFETTI_STAGGER_MS: u32 = 100;
pub const CONFETTI_LIFETIME_MS: u32 = 2000;
