//! Score banner tiers
//!
//! Maps a final score to the verdict line and color class shown on the
//! game-over overlay. Kept out of the sim so the tiers are testable
//! without a DOM.

/// Verdict line for the game-over banner
pub fn verdict(score: u32) -> &'static str {
    match score {
        0..=4 => "You Need More Practice! 🙃",
        5..=9 => "Good Job! 🥳",
        10..=19 => "Great! 😎",
        _ => "Excellent Performance! 🤩",
    }
}

/// CSS class for the banner tier
pub fn tier_class(score: u32) -> &'static str {
    match score {
        0..=4 => "tier-low",
        5..=9 => "tier-mid",
        10..=19 => "tier-high",
        _ => "tier-top",
    }
}
