use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Duration;

/// Single-slot deferred task. Each submission cancels whatever is pending
/// and schedules the new task after the configured delay, so only the most
/// recent submission ever runs (last-write-wins). Dropping the debouncer
/// cancels any run still waiting on its timer.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    settling: Arc<AtomicBool>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
            settling: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True between a submission and the moment its task finishes. The
    /// rendering layer reads this as its "searching" spinner state.
    pub fn is_pending(&self) -> bool {
        self.settling.load(Ordering::SeqCst)
    }

    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut slot = self.pending.lock().expect("debounce slot lock");
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        self.settling.store(true, Ordering::SeqCst);
        let settling = self.settling.clone();
        let delay = self.delay;
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
            settling.store(false, Ordering::SeqCst);
        }));
    }

    pub fn cancel(&self) {
        let mut slot = self.pending.lock().expect("debounce slot lock");
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        self.settling.store(false, Ordering::SeqCst);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::time::Duration;

    const DELAY: Duration = Duration::from_millis(50);

    async fn settle() {
        tokio::time::sleep(DELAY * 5).await;
    }

    #[tokio::test]
    async fn rapid_submissions_run_exactly_once_with_the_final_value() {
        let debouncer = Debouncer::new(DELAY);
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(Mutex::new(String::new()));

        for input in ["a", "ab", "abc"] {
            let runs = runs.clone();
            let last = last.clone();
            debouncer.submit(move || {
                runs.fetch_add(1, Ordering::SeqCst);
                *last.lock().expect("last value lock") = input.to_string();
            });
        }

        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(*last.lock().expect("last value lock"), "abc");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn pending_flag_tracks_the_open_window() {
        let debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());

        debouncer.submit(|| {});
        assert!(debouncer.is_pending());

        settle().await;
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn cancel_discards_the_scheduled_run() {
        let debouncer = Debouncer::new(DELAY);
        let runs = Arc::new(AtomicUsize::new(0));

        let counter = runs.clone();
        debouncer.submit(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test]
    async fn dropping_the_debouncer_cancels_in_flight_work() {
        let runs = Arc::new(AtomicUsize::new(0));
        {
            let debouncer = Debouncer::new(DELAY);
            let counter = runs.clone();
            debouncer.submit(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
