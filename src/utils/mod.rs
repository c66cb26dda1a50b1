// Shared helpers
pub mod date_utils;

pub use date_utils::{chart_date_label, parse_wire_date};
