use serde::Serialize;

use crate::config;
use crate::random::{pick, RandomSource};

/// Cards that take part in the reveal pass.
pub const REVEAL_SELECTOR: &str = ".service-card, .testimonial-card, .gallery-item";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px) rotate(5deg)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
pub const RESTING_OPACITY: &str = "1";
pub const RESTING_TRANSFORM: &str = "translateY(0) rotate(0deg)";

/// Keyframes used by every confetti particle. Installed once by the shell.
pub const FALL_KEYFRAMES: &str = r#"
    @keyframes fall {
        to {
            transform: translateY(100vh) rotate(360deg);
            opacity: 0;
        }
    }
"#;

pub const CONFETTI_GLYPHS: &[&str] = &["🎉", "✨", "🌟", "🎈", "📚"];

/// A single falling decoration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub id: u64,
    pub glyph: &'static str,
    /// Horizontal position in viewport widths, `0..100`.
    pub left_vw: f64,
    /// Fall animation length in seconds, `1..2`.
    pub duration_s: f64,
    /// Delay after the triggering click before the particle appears.
    pub delay_ms: u32,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "position: fixed; font-size: 1.5rem; z-index: 1000; top: 0; left: {}vw; animation: fall {}s linear forwards;",
            self.left_vw, self.duration_s
        )
    }
}

/// Lays out one burst of confetti. Ids are allocated from `first_id` upward.
pub fn plan_confetti(first_id: u64, random: &mut dyn RandomSource) -> Vec<Particle> {
    (0..config::CONFETTI_COUNT)
        .map(|i| Particle {
            id: first_id + i as u64,
            glyph: *pick(random, CONFETTI_GLYPHS),
            left_vw: random.next_unit() * 100.0,
            duration_s: 1.0 + random.next_unit(),
            delay_ms: i as u32 * config::CONFETTI_STAGGER_MS,
        })
        .collect()
}
