//! Terminal event loop.
//!
//! A background thread polls crossterm for input and emits a tick whenever
//! the tick interval passes without input. The main loop receives both over
//! a channel and runs every handler to completion before drawing again.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Events consumed by the application loop.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Periodic tick used to expire toasts.
    Tick,
    /// Key press.
    Key(KeyEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// Owns the input thread and hands out its events.
pub struct EventHandler {
    rx: Receiver<Event>,
}

impl EventHandler {
    /// Spawns the input thread with the given tick rate in milliseconds.
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                // A poll or read failure means the terminal is gone; stop feeding.
                let Ok(ready) = event::poll(timeout) else {
                    break;
                };

                if ready {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        Ok(_) => None,
                        Err(_) => break,
                    };
                    if let Some(ev) = forwarded {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    /// Blocks until the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the input thread has stopped.
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}
