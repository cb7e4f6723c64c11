//! Terminal session for the visualizer
//!
//! Owns raw mode and the alternate screen, restoring both on drop. Each
//! frame is queued into a pre-allocated byte buffer and flushed with a
//! single write so the terminal never shows a partially drawn frame.

use super::canvas::Canvas;
use crate::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Write};
use std::time::Duration;

/// Wireframe and readout color
const DRAW_COLOR: Color = Color::Green;

/// Raw-mode alternate-screen terminal session
pub struct TerminalSession {
    out: io::Stdout,
    /// Pre-allocated frame buffer; flushed in one write per present
    buf: Vec<u8>,
}

impl TerminalSession {
    /// Enter raw mode on the alternate screen with the cursor hidden
    pub fn new() -> Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            out,
            buf: Vec::with_capacity(32 * 1024),
        })
    }

    /// Drain pending input events, waiting up to `timeout` for the first
    ///
    /// Returns true when a quit key was seen: `q`, `Esc`, or `Ctrl-C`.
    /// The wait doubles as the frame pacing gate.
    pub fn poll_quit(&mut self, timeout: Duration) -> Result<bool> {
        let mut quit = false;
        let mut wait = timeout;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                    quit = true;
                }
            }
        }
        Ok(quit)
    }

    /// Present one frame: full redraw of the canvas in the fixed color
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.buf.clear();
        queue!(self.buf, SetForegroundColor(DRAW_COLOR))?;
        for y in 0..canvas.height() {
            let row: String = canvas.row(y).iter().collect();
            queue!(self.buf, cursor::MoveTo(0, y), Print(row))?;
        }
        queue!(self.buf, ResetColor)?;

        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
