use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tracing::warn;

pub enum Event {
    /// Terminal tick
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

pub struct EventHandler {
    /// Event receiver
    receiver: tokio::sync::mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);

        // crossterm polling blocks, so it runs on the blocking pool
        tokio::task::spawn_blocking(move || {
            let mut last_tick = std::time::Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::from_secs(0));

                let ready = match event::poll(timeout) {
                    Ok(ready) => ready,
                    Err(e) => {
                        warn!("Terminal poll failed: {}", e);
                        break;
                    }
                };

                if ready {
                    let forwarded = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            sender.blocking_send(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => {
                            sender.blocking_send(Event::Resize(width, height))
                        }
                        Ok(_) => Ok(()),
                        Err(e) => {
                            warn!("Terminal read failed: {}", e);
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.blocking_send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = std::time::Instant::now();
                }
            }
        });

        Self { receiver }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}
