//! Stateful label: configuration, text, grid and painter kept in sync.

use log::debug;

use crate::config::DisplayConfig;
use crate::engine::{build_grid, plan_pass, repaint, RenderPass, RenderRequest};
use crate::grid::CharacterGrid;
use crate::painter::Painter;
use crate::types::{DotMatrix, Result, Rgb};

/// Owns a display and re-renders it after every change.
///
/// Geometry, style and spacing changes rebuild the grid; text and color
/// changes update it in place. A setter that fails leaves the label exactly as
/// it was, painter included.
///
/// ```
/// use lcd_label_core::{DisplayConfig, LcdLabel, RenderPass};
///
/// let mut label = LcdLabel::new(DisplayConfig::default(), ());
/// assert_eq!(label.set_text("12:00"), RenderPass::Update);
/// assert!(label.grid().line_text(0).starts_with("12:00 "));
///
/// assert!(label.set_chars_per_line(0).is_err());
/// assert_eq!(label.grid().cols(), 16);
/// ```
#[derive(Debug)]
pub struct LcdLabel<C = Rgb, P = ()> {
    config: DisplayConfig<C>,
    text: String,
    grid: CharacterGrid<C>,
    painter: P,
}

impl<C: Clone, P: Painter<C>> LcdLabel<C, P> {
    /// Build the grid for `config` and paint it blank.
    pub fn new(config: DisplayConfig<C>, mut painter: P) -> Self {
        let mut grid = build_grid(&config, &mut painter);
        repaint(&config, "", &mut grid, &mut painter);
        Self {
            config,
            text: String::new(),
            grid,
            painter,
        }
    }

    pub fn config(&self) -> &DisplayConfig<C> {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn grid(&self) -> &CharacterGrid<C> {
        &self.grid
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    pub fn into_painter(self) -> P {
        self.painter
    }

    /// Replace the whole configuration at once.
    #[allow(clippy::too_many_arguments)]
    pub fn configure(
        &mut self,
        lines: i32,
        chars_per_line: i32,
        style: DotMatrix,
        dot_spacing: i32,
        letter_spacing: i32,
        on_color: C,
        off_color: C,
    ) -> Result<RenderPass> {
        self.config = DisplayConfig::from_parts(
            lines,
            chars_per_line,
            style,
            dot_spacing,
            letter_spacing,
            on_color,
            off_color,
        )?;
        debug!("lcd configured: {lines}x{chars_per_line} {style}");
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_lines(&mut self, lines: i32) -> Result<RenderPass> {
        self.config.set_lines(lines)?;
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_chars_per_line(&mut self, chars_per_line: i32) -> Result<RenderPass> {
        self.config.set_chars_per_line(chars_per_line)?;
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_style(&mut self, style: DotMatrix) -> RenderPass {
        self.config.set_style(style);
        self.render(RenderRequest::Rebuild)
    }

    /// Select a style by numeric code; unknown codes fail with
    /// [`LcdError::UnsupportedStyle`](crate::types::LcdError::UnsupportedStyle).
    pub fn set_style_code(&mut self, code: i32) -> Result<RenderPass> {
        self.config.set_style_code(code)?;
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_dot_spacing(&mut self, dot_spacing: i32) -> Result<RenderPass> {
        self.config.set_dot_spacing(dot_spacing)?;
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: i32) -> Result<RenderPass> {
        self.config.set_letter_spacing(letter_spacing)?;
        Ok(self.render(RenderRequest::Rebuild))
    }

    pub fn set_on_color(&mut self, color: C) -> RenderPass {
        self.config.set_on_color(color);
        self.render(RenderRequest::Update)
    }

    pub fn set_off_color(&mut self, color: C) -> RenderPass {
        self.config.set_off_color(color);
        self.render(RenderRequest::Update)
    }

    /// Replace the text. The previous text buffer is reused.
    pub fn set_text(&mut self, text: &str) -> RenderPass {
        self.text.clear();
        self.text.push_str(text);
        self.render(RenderRequest::Update)
    }

    fn render(&mut self, request: RenderRequest) -> RenderPass {
        let pass = plan_pass(&self.config, Some(&self.grid), request);
        if pass == RenderPass::Rebuild {
            self.grid = build_grid(&self.config, &mut self.painter);
        }
        repaint(&self.config, &self.text, &mut self.grid, &mut self.painter);
        pass
    }
}
