//! TerminalRenderer: flushes canvases to a real terminal.
//!
//! The first frame (and any frame after a size change) is drawn in full.
//! Later frames only rewrite the runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<Canvas>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call on any exit path.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw `canvas`, diffing against the previously drawn one.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        encode_frame(self.previous.as_ref(), canvas, &mut self.buf)?;
        self.flush_buf()?;

        match self.previous.as_mut() {
            Some(prev) => prev.clone_from(canvas),
            None => self.previous = Some(canvas.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands turning `previous` into `next` without touching stdout.
///
/// With no previous frame, or one of a different size, the screen is cleared
/// and every glyph is written.
pub fn encode_frame(previous: Option<&Canvas>, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let previous = previous.filter(|p| p.width() == next.width() && p.height() == next.height());
    if previous.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Style> = None;
    for (x, y, len) in changed_runs(previous, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = next.get(x + dx, y).unwrap_or_default();
            if current != Some(glyph.style) {
                apply_style(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(style.fg))?;
    out.queue(SetBackgroundColor(style.bg))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

/// Horizontal runs `(x, y, len)` of glyphs that differ between frames.
/// Without a previous frame every row is one run.
fn changed_runs(previous: Option<&Canvas>, next: &Canvas) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let Some(prev) = previous else {
            runs.push((0, y, next.width()));
            continue;
        };

        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}
