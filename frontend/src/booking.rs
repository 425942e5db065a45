use crate::config;
use crate::random::{pick, RandomSource};

pub const FORM_ID: &str = "bookingForm";
pub const NAME_FIELD_ID: &str = "name";

const FOLLOW_UP: &str = "\n\nI'll contact you via WhatsApp within 24 hours to schedule your first fun session!";

const CONFIRMATIONS: &[&str] = &[
    "Yay! Thank you, {name}! Your learning adventure request has been received! 🎉",
    "Awesome! {name}'s tutoring request is on its way to Teacher Sindi! 📚",
    "Fantastic! {name} is one step closer to fun learning! I'll contact you soon! ✨",
];

const GREETINGS: &[&str] = &[
    "Hi Teacher Sindi! I saw your fun tutoring website and I'm interested in learning more about your sessions!",
    "Hello Sindi! My child could use some fun learning help. Can you tell me more about your tutoring?",
    "Hi! Your tutoring looks so colorful and fun! I'd love to know more about sessions for my child.",
];

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Please enter the student's name!")]
    MissingName,
}

/// Checks the submitted name and builds the confirmation shown to the
/// visitor. Nothing is sent anywhere.
pub fn confirm(name: Option<&str>, random: &mut dyn RandomSource) -> Result<String, BookingError> {
    // Blank names are rejected, but the confirmation echoes what was typed.
    let Some(name) = name.filter(|name| !name.trim().is_empty()) else {
        return Err(BookingError::MissingName);
    };

    let template = pick(random, CONFIRMATIONS);
    Ok(format!("{}{}", template.replace("{name}", name), FOLLOW_UP))
}

/// WhatsApp deep link prefilled with one of the greeting messages.
pub fn contact_link(random: &mut dyn RandomSource) -> String {
    let message = pick(random, GREETINGS);
    format!(
        "https://wa.me/{}?text={}",
        config::whatsapp_number(),
        urlencoding::encode(message)
    )
}

/// Whether an anchor's href points at the messaging app.
pub fn is_contact_href(href: &str) -> bool {
    href.contains("whatsapp") || href.contains("wa.me")
}
