//! Terminal input for the stopwatch.
//!
//! Maps `crossterm` key events into [`StopwatchAction`]s. Only key presses are
//! meaningful; callers should drop repeat and release events before mapping.

pub mod map;

pub use map::{handle_key_event, should_quit, StopwatchAction};
