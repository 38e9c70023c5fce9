//! Pure badge construction logic (no IO).
//!
//! Input: a parsed coverage summary plus styling options.
//! Output: the badge-service URL to fetch.

#![forbid(unsafe_code)]

mod badge;
mod color;
mod encode;
mod options;

pub use badge::{badge_url, badge_url_at, BadgeError, DEFAULT_BADGE_HOST};
pub use color::{color_for, CoverageColor};
pub use encode::encode_component;
pub use options::{BadgeLink, BadgeOptions};
