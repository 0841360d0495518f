//! Terminal LCD stopwatch (default binary).
//!
//! Shows a running `mm:ss:ff` clock on a dot-matrix LCD label drawn with
//! crossterm through the framebuffer renderer.
//!
//! Logging goes through `env_logger` and is off unless `LCD_LOG_PATH` names a
//! file to append to (stderr would corrupt the alternate screen) or `RUST_LOG`
//! asks for it.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use lcd_label::core::LcdLabel;
use lcd_label::input::{handle_key_event, StopwatchAction};
use lcd_label::stopwatch::{Settings, Stopwatch};
use lcd_label::term::{CellStyle, FrameBuffer, LcdView, TerminalRenderer, Viewport};
use lcd_label::types::Rgb;

const LOG_PATH_ENV: &str = "LCD_LOG_PATH";

const STATUS_STYLE: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));

type Label = LcdLabel<Rgb, LcdView>;

fn main() -> Result<()> {
    init_logging()?;

    let settings = Settings::load()?;
    let config = settings
        .display_config()
        .context("invalid display settings")?;
    info!("starting stopwatch: {settings:?}");
    let mut label = LcdLabel::new(config, LcdView::new(settings.background));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut label, settings.tick_interval());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let log_path = std::env::var(LOG_PATH_ENV).ok();
    let default_filter = if log_path.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("install logger")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, label: &mut Label, tick: Duration) -> Result<()> {
    let epoch = Instant::now();
    let mut watch = Stopwatch::new();
    let mut screen = FrameBuffer::new(0, 0);
    let mut status = String::new();
    let mut last_tick = Instant::now();

    label.set_text(&watch.display_text());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        compose(&mut screen, &mut status, label, &watch, Viewport::new(w, h))?;
        term.draw_swap(&mut screen)?;

        // Input with timeout until next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let now = epoch.elapsed();
                    match handle_key_event(key) {
                        Some(StopwatchAction::Quit) => return Ok(()),
                        Some(StopwatchAction::StartStop) => watch.toggle(now),
                        Some(StopwatchAction::Reset) => watch.reset(now),
                        Some(StopwatchAction::Lap) => watch.lap(),
                        Some(StopwatchAction::NextStyle) => {
                            label.set_style(label.config().style().next());
                        }
                        None => {}
                    }
                    if watch.tick(now) {
                        label.set_text(&watch.display_text());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if watch.tick(epoch.elapsed()) {
                label.set_text(&watch.display_text());
            }
        }
    }
}

/// Centre the LCD on the screen and put a key help line under it.
fn compose(
    screen: &mut FrameBuffer,
    status: &mut String,
    label: &Label,
    watch: &Stopwatch,
    viewport: Viewport,
) -> Result<()> {
    screen.resize(viewport.width, viewport.height);
    screen.clear(STATUS_STYLE.into_cell(' '));

    let view = label.painter();
    let (x, y) = view.centred_in(viewport);
    screen.blit(view.frame(), x, y);

    let state = match (watch.is_running(), watch.is_lapped()) {
        (true, true) => "LAP",
        (true, false) => "RUN",
        (false, _) => "STOP",
    };
    status.clear();
    write!(
        status,
        "{state:<4} | space start/stop | r reset | l lap | tab style ({}) | q quit",
        label.config().style()
    )?;

    let help_y = y.saturating_add(view.size().height).saturating_add(1);
    let help_y = help_y.min(viewport.height.saturating_sub(1));
    let help_x = viewport.width.saturating_sub(status.chars().count() as u16) / 2;
    screen.put_str(help_x, help_y, status, STATUS_STYLE);
    Ok(())
}
