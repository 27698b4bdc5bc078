//! Per-keystroke input helpers: phone formatting and the message counter

mod char_counter;
mod phone;

pub use char_counter::{CharCounter, CounterTier};
pub use phone::format_phone;
