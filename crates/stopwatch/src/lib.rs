//! Stopwatch driver for an LCD label.
//!
//! [`Stopwatch`] is a pure state machine fed with monotonic clock readings;
//! [`Settings`] gathers the display configuration from defaults, an optional
//! JSON file and environment overrides. The `lcd-stopwatch` binary ties both
//! to a terminal label.
//!
//! ```
//! use std::time::Duration;
//! use lcd_label_core::LcdLabel;
//! use lcd_label_stopwatch::{Settings, Stopwatch};
//!
//! let settings = Settings::default();
//! let mut label = LcdLabel::new(settings.display_config().unwrap(), ());
//! let mut watch = Stopwatch::new();
//!
//! watch.toggle(Duration::ZERO);
//! if watch.tick(Duration::from_millis(1_500)) {
//!     label.set_text(&watch.display_text());
//! }
//! assert_eq!(label.grid().line_text(0), "00:01:50");
//! ```

pub mod settings;
pub mod stopwatch;

pub use settings::{Settings, CONFIG_ENV, DEFAULT_TICK_MS};
pub use stopwatch::{format_duration, DisplayText, Stopwatch};
