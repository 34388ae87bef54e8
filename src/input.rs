//! Input port: decodes pending key events into one frame of controls.
//!
//! Events arrive on an `mpsc` channel fed by a dedicated reader thread
//! (see `main.rs`), so polling here never blocks.

use std::sync::mpsc::Receiver;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Controls;

/// Everything the outer loop needs from one input poll.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub controls: Controls,
    pub quit: bool,
    /// New (rows, cols) if the terminal was resized since the last poll.
    pub resize: Option<(u16, u16)>,
}

/// Drain every pending event without blocking.  Returns neutral controls
/// when no key is waiting.  Arrows and WASD steer, space fires, `q` or
/// Esc (or Ctrl-C) quits.
pub fn poll(rx: &Receiver<Event>) -> InputState {
    let mut state = InputState::default();

    while let Ok(event) = rx.try_recv() {
        match event {
            Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) => {
                if kind == KeyEventKind::Release {
                    continue;
                }
                match code {
                    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        state.controls.row_dir = -1;
                    }
                    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                        state.controls.row_dir = 1;
                    }
                    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                        state.controls.col_dir = -1;
                    }
                    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                        state.controls.col_dir = 1;
                    }
                    KeyCode::Char(' ') => {
                        state.controls.fire = true;
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        state.quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        state.quit = true;
                    }
                    _ => {}
                }
            }
            // crossterm reports (columns, rows)
            Event::Resize(cols, rows) => {
                state.resize = Some((rows, cols));
            }
            _ => {}
        }
    }

    state
}
