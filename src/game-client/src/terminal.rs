use std::{
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::{debug, warn};

use crate::{
    input::{InputBatch, InputSource, Key},
    layout::{Point, Rect},
    render::{RenderSink, Tone},
};

/// Raw mode, mouse capture and the alternate screen for as long as it lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(TerminalGuard { _private: () })
    }

    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen) {
            warn!("Failed to restore terminal: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to leave raw mode: {}", e);
        }
    }
}

/// Drains pending crossterm events without waiting.
#[derive(Debug, Default)]
pub struct TerminalInput {}

impl TerminalInput {
    pub fn new() -> Self {
        Self {}
    }

    fn apply(batch: &mut InputBatch, event: Event) {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(_),
                column,
                row,
                ..
            }) => batch.releases.push(Point::new(column, row)),
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Esc => batch.quit = true,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    batch.quit = true
                }
                KeyCode::Char(' ') => batch.keys.push(Key::Space),
                KeyCode::Char(c) => batch.keys.push(Key::Char(c)),
                KeyCode::Enter => batch.keys.push(Key::Enter),
                _ => batch.keys.push(Key::Other),
            },
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<InputBatch> {
        let mut batch = InputBatch::default();
        while event::poll(Duration::ZERO)? {
            Self::apply(&mut batch, event::read()?);
        }
        if !batch.is_empty() {
            debug!(?batch, "Terminal input");
        }
        Ok(batch)
    }
}

pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        TerminalSink { out }
    }
}

fn color(tone: Tone) -> Color {
    match tone {
        Tone::Plain => Color::White,
        Tone::Accent => Color::Blue,
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn text(&mut self, at: Point, text: &str, tone: Tone) -> io::Result<()> {
        let half = (text.chars().count() / 2) as u16;
        queue!(
            self.out,
            MoveTo(at.x.saturating_sub(half), at.y),
            SetForegroundColor(color(tone)),
            Print(text),
            ResetColor
        )
    }

    fn region(&mut self, rect: Rect, label: &str) -> io::Result<()> {
        let inner = rect.width.saturating_sub(2) as usize;
        let edge = format!("+{}+", "-".repeat(inner));
        let side = format!("|{}|", " ".repeat(inner));
        for row in rect.y..rect.bottom() {
            let line = if row == rect.y || row + 1 == rect.bottom() {
                &edge
            } else {
                &side
            };
            queue!(self.out, MoveTo(rect.x, row), Print(line))?;
        }
        self.text(rect.center(), label, Tone::Plain)
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
