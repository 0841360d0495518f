//! Settings for the stopwatch display.
//!
//! Settings are layered:
//!
//! 1. built-in defaults;
//! 2. a JSON file named by `LCD_CONFIG`, if set;
//! 3. single-value overrides from the environment.
//!
//! | Variable | Field | Accepted |
//! |----------|-------|----------|
//! | `LCD_STYLE` | `style` | a style name, e.g. `9x12`, `hitachi2` |
//! | `LCD_LINES` | `lines` | 1 ..= 65535 |
//! | `LCD_CHARS` | `chars_per_line` | 1 ..= 65535 |
//! | `LCD_DOT_SPACING` | `dot_spacing` | 0 ..= 65535 |
//! | `LCD_LETTER_SPACING` | `letter_spacing` | 0 ..= 65535 |
//! | `LCD_TICK_MS` | `tick_ms` | integer >= 1 |
//!
//! A bad override is logged and ignored. A config file that cannot be read or
//! parsed is an error.

use std::fmt::Display;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use lcd_label_core::{DisplayConfig, DEFAULT_OFF_COLOR, DEFAULT_ON_COLOR};
use lcd_label_types::{
    DotMatrix, LcdError, Rgb, DEFAULT_DOT_SPACING, DEFAULT_LETTER_SPACING, DEFAULT_LINES,
};

pub const CONFIG_ENV: &str = "LCD_CONFIG";

/// Timer interval of the stopwatch: one hundredth of a second.
pub const DEFAULT_TICK_MS: u64 = 10;

/// Width of `mm:ss:ff`.
pub const DEFAULT_STOPWATCH_CHARS: i32 = 8;

pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0x6f, 0x86, 0x44);

/// Accepted override ranges; a `DisplayConfig` stores these as `u16`.
const COUNT_RANGE: RangeInclusive<i32> = 1..=u16::MAX as i32;
const SPACING_RANGE: RangeInclusive<i32> = 0..=u16::MAX as i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub lines: i32,
    pub chars_per_line: i32,
    pub style: DotMatrix,
    pub dot_spacing: i32,
    pub letter_spacing: i32,
    pub on_color: Rgb,
    pub off_color: Rgb,
    /// Color between pixels and around characters.
    pub background: Rgb,
    pub tick_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lines: i32::from(DEFAULT_LINES),
            chars_per_line: DEFAULT_STOPWATCH_CHARS,
            style: DotMatrix::default(),
            dot_spacing: i32::from(DEFAULT_DOT_SPACING),
            letter_spacing: i32::from(DEFAULT_LETTER_SPACING),
            on_color: DEFAULT_ON_COLOR,
            off_color: DEFAULT_OFF_COLOR,
            background: DEFAULT_BACKGROUND,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Settings {
    /// Load from the process environment.
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `env` to look up variables.
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = match env(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_overrides(env);
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("load settings file {}", path.display()))?;
        debug!("settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse settings JSON")
    }

    /// Apply the `LCD_*` single-value overrides.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        override_value(&env, "LCD_STYLE", &mut self.style, |_| true);
        override_value(&env, "LCD_LINES", &mut self.lines, |v| COUNT_RANGE.contains(v));
        override_value(&env, "LCD_CHARS", &mut self.chars_per_line, |v| COUNT_RANGE.contains(v));
        override_value(&env, "LCD_DOT_SPACING", &mut self.dot_spacing, |v| {
            SPACING_RANGE.contains(v)
        });
        override_value(&env, "LCD_LETTER_SPACING", &mut self.letter_spacing, |v| {
            SPACING_RANGE.contains(v)
        });
        override_value(&env, "LCD_TICK_MS", &mut self.tick_ms, |v| *v >= 1);
    }

    /// Validate the display fields.
    pub fn display_config(&self) -> Result<DisplayConfig, LcdError> {
        DisplayConfig::from_parts(
            self.lines,
            self.chars_per_line,
            self.style,
            self.dot_spacing,
            self.letter_spacing,
            self.on_color,
            self.off_color,
        )
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

fn override_value<T>(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    slot: &mut T,
    accept: impl Fn(&T) -> bool,
) where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = env(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if accept(&value) => {
            debug!("{key} override: {value}");
            *slot = value;
        }
        Ok(value) => warn!("ignoring {key}={value}: out of range, keeping {slot}"),
        Err(e) => warn!("ignoring {key}={raw:?}: {e}, keeping {slot}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_fit_the_stopwatch_text() {
        let settings = Settings::load_with(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        let config = settings.display_config().unwrap();
        assert_eq!(config.chars_per_line(), 8);
        assert_eq!(settings.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn overrides_apply() {
        let settings = Settings::load_with(env(&[
            ("LCD_STYLE", "hitachi2"),
            ("LCD_LINES", "2"),
            ("LCD_CHARS", " 12 "),
            ("LCD_DOT_SPACING", "4"),
            ("LCD_LETTER_SPACING", "0"),
            ("LCD_TICK_MS", "50"),
        ]))
        .unwrap();
        assert_eq!(settings.style, DotMatrix::HitachiExtended);
        assert_eq!(settings.lines, 2);
        assert_eq!(settings.chars_per_line, 12);
        assert_eq!(settings.dot_spacing, 4);
        assert_eq!(settings.letter_spacing, 0);
        assert_eq!(settings.tick_ms, 50);
    }

    #[test]
    fn bad_overrides_fall_back() {
        let settings = Settings::load_with(env(&[
            ("LCD_STYLE", "14seg"),
            ("LCD_LINES", "0"),
            ("LCD_CHARS", "many"),
            ("LCD_DOT_SPACING", "-1"),
            ("LCD_TICK_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn overrides_past_the_display_range_fall_back() {
        let settings = Settings::load_with(env(&[
            ("LCD_LINES", "70000"),
            ("LCD_CHARS", "65536"),
            ("LCD_DOT_SPACING", "65535"),
            ("LCD_LETTER_SPACING", "100000"),
        ]))
        .unwrap();
        assert_eq!(settings.lines, Settings::default().lines);
        assert_eq!(settings.chars_per_line, DEFAULT_STOPWATCH_CHARS);
        assert_eq!(settings.dot_spacing, 65535);
        assert_eq!(settings.letter_spacing, Settings::default().letter_spacing);
        assert!(settings.display_config().is_ok());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let settings = Settings::from_json(
            r#"{ "style": "9x12", "on_color": { "r": 255, "g": 64, "b": 0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.style, DotMatrix::Mat9x12);
        assert_eq!(settings.on_color, Rgb::new(255, 64, 0));
        assert_eq!(settings.chars_per_line, DEFAULT_STOPWATCH_CHARS);
    }

    #[test]
    fn json_rejects_unknown_fields_and_styles() {
        assert!(Settings::from_json(r#"{ "colour": 1 }"#).is_err());
        assert!(Settings::from_json(r#"{ "style": "16seg" }"#).is_err());
    }

    #[test]
    fn invalid_file_values_fail_validation() {
        let settings = Settings::from_json(r#"{ "lines": 0 }"#).unwrap();
        assert_eq!(
            settings.display_config(),
            Err(LcdError::InvalidConfiguration("lines"))
        );
    }

    #[test]
    fn config_file_then_overrides() {
        let path = std::env::temp_dir().join(format!("lcd-settings-{}.json", std::process::id()));
        fs::write(&path, r#"{ "chars_per_line": 20, "lines": 3 }"#).unwrap();
        let path_str = path.to_string_lossy().into_owned();

        let settings =
            Settings::load_with(env(&[(CONFIG_ENV, path_str.as_str()), ("LCD_LINES", "2")])).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(settings.chars_per_line, 20);
        assert_eq!(settings.lines, 2);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = Settings::load_with(env(&[(CONFIG_ENV, "/nonexistent/lcd.json")])).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lcd.json"));
    }
}
