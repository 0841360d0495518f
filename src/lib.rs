//! LCD label (workspace facade crate).
//!
//! Re-exports the member crates under one name so tests, benches and the
//! binary can use `lcd_label::{core, fonts, ...}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use lcd_label_core as core;
pub use lcd_label_fonts as fonts;
pub use lcd_label_input as input;
pub use lcd_label_stopwatch as stopwatch;
pub use lcd_label_term as term;
pub use lcd_label_types as types;
