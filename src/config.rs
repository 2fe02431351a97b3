use log::Level;

/// Contact form intake. When unset the form simulates the round trip.
pub fn intake_endpoint() -> Option<&'static str> {
    option_env!("HALCYON_INTAKE_URL").filter(|url| !url.is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CONTACT_EMAIL: &str = "hello@halcyon.studio";

// Milliseconds.
pub const SIMULATED_SUBMIT_DELAY: u32 = 1200;
pub const TOAST_DURATION: u32 = 4000;
pub const TESTIMONIAL_ROTATION: u32 = 6000;
