//! Formatting helpers for prices and dates.

pub mod format;

pub use format::{format_date, format_prix, parse_timestamp, time_ago, time_ago_str};
