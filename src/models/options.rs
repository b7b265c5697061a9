//! Fixed option lists backing the profile chip selectors.
//!
//! These mirror the choices offered by the edit-profile screen; the
//! coordinator does not validate against them (caller-level toggling only).

pub const TIMEZONE_OPTIONS: &[&str] = &["EU", "NA East", "NA West", "Asia", "OCE"];

pub const PLATFORM_OPTIONS: &[&str] = &["PC", "PlayStation", "Xbox", "Nintendo", "Mobile"];

pub const PLAYTIME_OPTIONS: &[&str] =
    &["Mornings", "Afternoons", "Evenings", "Nights", "Weekends"];

pub const TAG_OPTIONS: &[&str] = &[
    "Chill player",
    "Try hard",
    "Competitive",
    "Casual",
    "Sherpa",
    "New player",
    "Raid ready",
    "PvP focused",
    "PvE focused",
];

pub const GAME_OPTIONS: &[&str] = &[
    "Destiny 2",
    "Call of Duty",
    "Fortnite",
    "Apex Legends",
    "Valorant",
    "League of Legends",
    "Minecraft",
    "GTA V",
    "Rocket League",
    "Overwatch 2",
];
