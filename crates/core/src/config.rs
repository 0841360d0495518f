//! Validated display configuration.

use crate::grid::GridDims;
use crate::types::{
    DotMatrix, LcdError, Result, Rgb, DEFAULT_CHARS_PER_LINE, DEFAULT_DOT_SPACING,
    DEFAULT_LETTER_SPACING, DEFAULT_LINES,
};

/// Lit pixel color of the default configuration.
pub const DEFAULT_ON_COLOR: Rgb = Rgb::new(0x1b, 0x26, 0x12);

/// Unlit pixel color of the default configuration.
pub const DEFAULT_OFF_COLOR: Rgb = Rgb::new(0x8f, 0xa8, 0x5c);

/// Geometry, style and colors of one display.
///
/// Every field is validated before it is stored, so a value of this type is
/// always renderable. Setters leave the configuration untouched on error.
///
/// ```
/// use lcd_label_core::DisplayConfig;
/// use lcd_label_types::{DotMatrix, LcdError};
///
/// let mut config = DisplayConfig::default();
/// assert_eq!(config.lines(), 1);
/// assert_eq!(config.chars_per_line(), 16);
///
/// assert_eq!(config.set_lines(0), Err(LcdError::InvalidConfiguration("lines")));
/// assert_eq!(config.lines(), 1);
///
/// config.set_style(DotMatrix::Mat9x12);
/// assert_eq!(config.dims().cell_height, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig<C = Rgb> {
    lines: u16,
    chars_per_line: u16,
    style: DotMatrix,
    dot_spacing: u16,
    letter_spacing: u16,
    on_color: C,
    off_color: C,
}

impl<C> DisplayConfig<C> {
    /// Default geometry with the given colors.
    pub fn new(on_color: C, off_color: C) -> Self {
        Self {
            lines: DEFAULT_LINES,
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            style: DotMatrix::default(),
            dot_spacing: DEFAULT_DOT_SPACING,
            letter_spacing: DEFAULT_LETTER_SPACING,
            on_color,
            off_color,
        }
    }

    /// Validate every field at once.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// reported.
    pub fn from_parts(
        lines: i32,
        chars_per_line: i32,
        style: DotMatrix,
        dot_spacing: i32,
        letter_spacing: i32,
        on_color: C,
        off_color: C,
    ) -> Result<Self> {
        Ok(Self {
            lines: positive("lines", lines)?,
            chars_per_line: positive("charsPerLine", chars_per_line)?,
            style,
            dot_spacing: non_negative("dotSpacing", dot_spacing)?,
            letter_spacing: non_negative("letterSpacing", letter_spacing)?,
            on_color,
            off_color,
        })
    }

    pub fn lines(&self) -> u16 {
        self.lines
    }

    pub fn chars_per_line(&self) -> u16 {
        self.chars_per_line
    }

    pub fn style(&self) -> DotMatrix {
        self.style
    }

    pub fn dot_spacing(&self) -> u16 {
        self.dot_spacing
    }

    pub fn letter_spacing(&self) -> u16 {
        self.letter_spacing
    }

    pub fn on_color(&self) -> &C {
        &self.on_color
    }

    pub fn off_color(&self) -> &C {
        &self.off_color
    }

    /// Grid dimensions implied by this configuration.
    pub fn dims(&self) -> GridDims {
        let (cell_height, cell_width) = lcd_label_fonts::resolve_cell_size(self.style);
        GridDims {
            rows: self.lines as usize,
            cols: self.chars_per_line as usize,
            cell_height,
            cell_width,
        }
    }

    pub fn set_lines(&mut self, lines: i32) -> Result<()> {
        self.lines = positive("lines", lines)?;
        Ok(())
    }

    pub fn set_chars_per_line(&mut self, chars_per_line: i32) -> Result<()> {
        self.chars_per_line = positive("charsPerLine", chars_per_line)?;
        Ok(())
    }

    pub fn set_style(&mut self, style: DotMatrix) {
        self.style = style;
    }

    /// Select a style by numeric code.
    pub fn set_style_code(&mut self, code: i32) -> Result<()> {
        self.style = DotMatrix::try_from(code)?;
        Ok(())
    }

    pub fn set_dot_spacing(&mut self, dot_spacing: i32) -> Result<()> {
        self.dot_spacing = non_negative("dotSpacing", dot_spacing)?;
        Ok(())
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: i32) -> Result<()> {
        self.letter_spacing = non_negative("letterSpacing", letter_spacing)?;
        Ok(())
    }

    pub fn set_on_color(&mut self, color: C) {
        self.on_color = color;
    }

    pub fn set_off_color(&mut self, color: C) {
        self.off_color = color;
    }
}

impl Default for DisplayConfig<Rgb> {
    fn default() -> Self {
        Self::new(DEFAULT_ON_COLOR, DEFAULT_OFF_COLOR)
    }
}

fn positive(field: &'static str, value: i32) -> Result<u16> {
    if value < 1 {
        return Err(LcdError::InvalidConfiguration(field));
    }
    non_negative(field, value)
}

fn non_negative(field: &'static str, value: i32) -> Result<u16> {
    u16::try_from(value).map_err(|_| LcdError::InvalidConfiguration(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(lines: i32, chars: i32, dot: i32, letter: i32) -> Result<DisplayConfig> {
        DisplayConfig::from_parts(
            lines,
            chars,
            DotMatrix::Mat5x7,
            dot,
            letter,
            DEFAULT_ON_COLOR,
            DEFAULT_OFF_COLOR,
        )
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = DisplayConfig::default();
        assert_eq!(config.lines(), 1);
        assert_eq!(config.chars_per_line(), 16);
        assert_eq!(config.style(), DotMatrix::Mat5x7);
        assert_eq!(config.dot_spacing(), 0);
        assert_eq!(config.letter_spacing(), 3);
    }

    #[test]
    fn from_parts_reports_the_offending_field() {
        assert_eq!(
            parts(0, 5, 0, 0),
            Err(LcdError::InvalidConfiguration("lines"))
        );
        assert_eq!(
            parts(1, -3, 0, 0),
            Err(LcdError::InvalidConfiguration("charsPerLine"))
        );
        assert_eq!(
            parts(1, 5, -1, 0),
            Err(LcdError::InvalidConfiguration("dotSpacing"))
        );
        assert_eq!(
            parts(1, 5, 0, -1),
            Err(LcdError::InvalidConfiguration("letterSpacing"))
        );
        assert!(parts(1, 1, 0, 0).is_ok());
    }

    #[test]
    fn values_wider_than_u16_are_rejected() {
        assert_eq!(
            parts(70_000, 5, 0, 0),
            Err(LcdError::InvalidConfiguration("lines"))
        );
        assert_eq!(
            parts(1, 5, 0, i32::MAX),
            Err(LcdError::InvalidConfiguration("letterSpacing"))
        );
    }

    #[test]
    fn failing_setters_keep_previous_values() {
        let mut config = DisplayConfig::default();
        config.set_chars_per_line(20).unwrap();
        config.set_dot_spacing(4).unwrap();

        assert!(config.set_chars_per_line(0).is_err());
        assert!(config.set_dot_spacing(-2).is_err());
        assert!(config.set_style_code(42).is_err());

        assert_eq!(config.chars_per_line(), 20);
        assert_eq!(config.dot_spacing(), 4);
        assert_eq!(config.style(), DotMatrix::Mat5x7);
    }

    #[test]
    fn dims_follow_the_style() {
        let mut config = DisplayConfig::default();
        config.set_lines(2).unwrap();
        config.set_style_code(5).unwrap();
        assert_eq!(
            config.dims(),
            GridDims {
                rows: 2,
                cols: 16,
                cell_height: 10,
                cell_width: 5,
            }
        );
    }
}
