use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A background thread calling back at a fixed interval until cancelled.
///
/// Dropping the ticker cancels it and waits for the thread to exit, so a
/// ticker can never outlive its owner.
#[derive(Debug)]
pub struct Ticker {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Call `on_tick` every `interval`. Returning `false` from the callback
    /// stops the ticker.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let interval = interval.max(Duration::from_millis(1));
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                loop {
                    if flag.load(Ordering::Acquire) {
                        return;
                    }
                    let now = Instant::now();
                    if now >= next {
                        break;
                    }
                    thread::park_timeout(next - now);
                }
                if !on_tick() {
                    return;
                }
                next += interval;
            }
        });
        Self {
            cancelled,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.load(Ordering::Acquire)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop ticking and join the thread. Safe to call more than once.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                tracing::warn!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let mut ticker = Ticker::start(Duration::from_millis(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
            true
        });
        thread::sleep(Duration::from_millis(60));
        assert!(ticker.is_active());
        ticker.cancel();
        assert!(!ticker.is_active());
        let after = count.load(Ordering::SeqCst);
        assert!(after > 0);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after);
        ticker.cancel();
    }

    #[test]
    fn drop_stops_the_thread_promptly() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        let started = Instant::now();
        {
            let _ticker = Ticker::start(Duration::from_secs(60), move || {
                c.fetch_add(1, Ordering::SeqCst);
                true
            });
        }
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn callback_can_stop_itself() {
        let ticker = Ticker::start(Duration::from_millis(1), || false);
        thread::sleep(Duration::from_millis(50));
        assert!(!ticker.is_active());
    }
}
