use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

/// Terminal input and clock ticks, merged into one stream.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || poll_terminal(tx, tick));
        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

fn poll_terminal(tx: mpsc::UnboundedSender<AppEvent>, tick: Duration) {
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick.saturating_sub(last_tick.elapsed());
        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(error) => {
                tracing::error!(%error, "terminal_poll_failed");
                return;
            }
        };

        let app_event = if ready {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Ok(Event::Resize(..)) => Some(AppEvent::Resize),
                Ok(_) => None,
                Err(error) => {
                    tracing::error!(%error, "terminal_read_failed");
                    return;
                }
            }
        } else {
            None
        };

        if let Some(app_event) = app_event {
            if tx.send(app_event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
        }
    }
}
