//! Terminal front end for LCD labels.
//!
//! [`LcdView`] is a [`Painter`](lcd_label_core::Painter) that draws the grid
//! into a [`FrameBuffer`]; [`TerminalRenderer`] flushes framebuffers to the
//! terminal with crossterm, writing only the cells that changed since the last
//! frame.
//!
//! Nothing here depends on ratatui or any widget layer; aspect ratio is handled
//! by drawing each LCD pixel two columns wide.

pub mod fb;
pub mod lcd_view;
pub mod renderer;

pub use lcd_label_core as core;
pub use lcd_label_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use lcd_view::{LcdView, Viewport, MAX_FRAME_SIDE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
