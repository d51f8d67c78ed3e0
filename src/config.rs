use log::Level;

/// Vertical allowance for the fixed nav bar when deciding which legal
/// section is in view.
pub const SECTION_SCROLL_OFFSET_PX: f64 = 200.0;

pub const HERO_REVEAL_THRESHOLD: f64 = 0.2;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.3;

// Nav bar switches to its solid background past this point
pub const NAV_SCROLLED_AFTER_PX: f64 = 80.0;

pub const LOGIN_NOTICE_MS: u32 = 4_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
