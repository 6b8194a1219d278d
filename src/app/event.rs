//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards the events the page cares
//! about over a channel, interleaved with animation ticks, so the main loop
//! only ever awaits one receiver.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation frame.
    Tick,
}

/// Translate a raw crossterm event, dropping the ones nothing handles
/// (key releases, mouse motion, focus, paste).
fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => match m.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Up(_) => None,
            _ => Some(AppEvent::Mouse(m)),
        },
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || loop {
        // Poll with the tick rate so ticks keep flowing when idle.
        let has_event = event::poll(tick_rate).unwrap_or(false);
        let next = if has_event {
            match event::read() {
                Ok(ev) => match translate(ev) {
                    Some(app_event) => app_event,
                    None => continue,
                },
                Err(err) => {
                    tracing::warn!("terminal event read failed: {err}");
                    continue;
                }
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(next).is_err() {
            break; // receiver dropped
        }
    });

    rx
}
