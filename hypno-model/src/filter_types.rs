//! Facet option lists offered by the portfolio browsing controls.
//!
//! Each list starts with the [`ALL_SENTINEL`] entry, which stands for "no
//! restriction" rather than a real value. The lists are authored alongside the
//! catalog data and are not cross-checked against it: a value missing from the
//! data simply filters down to nothing.

/// Facet value meaning "do not filter on this field".
pub const ALL_SENTINEL: &str = "All";

pub const CATEGORY_OPTIONS: &[&str] = &[
    ALL_SENTINEL,
    "Strategy",
    "RPG",
    "Racing",
    "MMORPG",
    "Educational",
    "Battle Royale",
    "Tower Defense",
    "Roguelike",
    "Simulation",
];

pub const STATUS_OPTIONS: &[&str] =
    &[ALL_SENTINEL, "Live", "Growing", "Development"];

pub const PLATFORM_OPTIONS: &[&str] = &[
    ALL_SENTINEL,
    "PC/Steam",
    "Mobile",
    "Console",
    "PC/Mobile",
    "Web/Educational",
    "PC/Console",
    "Mobile/PC",
    "Mobile/Switch",
];

/// The sentinel comparison is exact, as with every facet value.
pub fn is_all_sentinel(value: &str) -> bool {
    value == ALL_SENTINEL
}
