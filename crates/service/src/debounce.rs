//! Keystroke-to-search rate limiting.
//!
//! A term is emitted once input has been quiet for the debounce delay, and
//! only if it differs from the previously emitted one.

use std::time::Duration;

use pokedex_core::constants::SEARCH_DEBOUNCE_MS;
use pokedex_core::sanitize_search_term;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Debounce + distinct-consecutive state. Time is passed in by the caller.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: Option<String>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(SEARCH_DEBOUNCE_MS))
    }
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None, last_emitted: None }
    }

    /// Records raw input typed at `now`; restarts the quiet period.
    pub fn input(&mut self, raw: &str, now: Instant) {
        self.pending = Some((raw.trim().to_owned(), now));
    }

    /// When the pending input becomes due, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }

    /// Emits the sanitized pending term once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.flush()
    }

    /// Emits the pending term immediately (input ended), subject to the
    /// distinct-consecutive rule.
    pub fn flush(&mut self) -> Option<String> {
        let (term, _) = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(term.as_str()) {
            tracing::debug!(term = %term, "suppressing repeated search term");
            return None;
        }
        let sanitized = sanitize_search_term(&term);
        self.last_emitted = Some(term);
        Some(sanitized)
    }
}

/// Runs a [`Debouncer`] over `input`, forwarding emitted terms to `output`.
///
/// The task ends when `input` closes (after flushing any pending term) or
/// when `output` is dropped.
pub fn spawn_debounced(
    delay: Duration,
    mut input: mpsc::Receiver<String>,
    output: mpsc::Sender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut debouncer = Debouncer::new(delay);
        loop {
            let received = match debouncer.deadline() {
                Some(deadline) => tokio::select! {
                    msg = input.recv() => Some(msg),
                    () = tokio::time::sleep_until(deadline) => None,
                },
                None => Some(input.recv().await),
            };
            let emitted = match received {
                Some(Some(raw)) => {
                    debouncer.input(&raw, Instant::now());
                    continue;
                },
                Some(None) => {
                    if let Some(term) = debouncer.flush() {
                        let _ = output.send(term).await;
                    }
                    break;
                },
                None => debouncer.poll(Instant::now()),
            };
            if let Some(term) = emitted {
                if output.send(term).await.is_err() {
                    break;
                }
            }
        }
    })
}
