//! LCD label core: configuration, render engine and the stateful label.
//!
//! This crate turns a [`DisplayConfig`] and a string into a
//! [`CharacterGrid`] of resolved pixel colors, and drives a [`Painter`] with
//! the result. It has no dependency on any terminal or UI toolkit; the
//! terminal painter lives in `lcd-label-term`.
//!
//! # Module Structure
//!
//! - [`config`]: validated geometry, style, spacing and colors
//! - [`grid`]: the rendered grid and its cells
//! - [`engine`]: rebuild/update decision and the render pass itself
//! - [`painter`]: the collaborator trait fed by every pass
//! - [`label`]: [`LcdLabel`], which owns all of the above and re-renders on
//!   every change
//!
//! # Rebuild vs update
//!
//! | Change | Pass |
//! |--------|------|
//! | lines, chars per line, style | rebuild |
//! | dot spacing, letter spacing | rebuild |
//! | on/off color | update |
//! | text | update |
//!
//! An update pass reuses the grid's cells and performs no heap allocation.
//!
//! # Example
//!
//! ```
//! use lcd_label_core::{DisplayConfig, LcdLabel};
//! use lcd_label_types::DotMatrix;
//!
//! let mut config = DisplayConfig::default();
//! config.set_chars_per_line(5).unwrap();
//!
//! let mut label = LcdLabel::new(config, ());
//! label.set_text("HI");
//!
//! let codes: Vec<u8> = label.grid().cells().iter().map(|c| c.code()).collect();
//! assert_eq!(codes, b"HI   ");
//!
//! label.set_style(DotMatrix::Hitachi);
//! assert_eq!(label.grid().dims().cell_height, 7);
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod label;
pub mod painter;

pub use lcd_label_fonts as fonts;
pub use lcd_label_types as types;

pub use config::{DisplayConfig, DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};
pub use engine::{build_grid, plan_pass, render, render_into, repaint, RenderPass, RenderRequest};
pub use grid::{Cell, CharacterGrid, GridDims};
pub use label::LcdLabel;
pub use painter::{GridLayout, Painter};
