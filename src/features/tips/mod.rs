//! # Study Tips Feature
//!
//! Random study, wellness and time management tips for `!tip`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use rand::seq::IndexedRandom;

pub const TIPS: &[&str] = &[
    "Take regular breaks to boost productivity.",
    "Try the Pomodoro technique for focused study.",
    "Stay hydrated and get enough sleep.",
];

pub fn random_tip() -> &'static str {
    TIPS.choose(&mut rand::rng()).copied().unwrap_or(TIPS[0])
}
