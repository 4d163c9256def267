use std::sync::atomic::{AtomicU64, Ordering};

/// Polled by long running work between units of work. Cancellation is
/// cooperative: a token can only stop work at the next check.
pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Cancelled as soon as the shared generation counter moves past the value
/// captured when the work started.
#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    current: &'a AtomicU64,
    ours: u64,
}

impl<'a> GenerationToken<'a> {
    #[must_use]
    pub fn new(current: &'a AtomicU64, ours: u64) -> Self {
        Self { current, ours }
    }
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.current.load(Ordering::Acquire) != self.ours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[test]
    fn never_cancel_always_returns_false() {
        let token = NeverCancel;
        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
    }

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn generation_token_cancels_when_counter_moves() {
        let counter = AtomicU64::new(3);
        let token = GenerationToken::new(&counter, 3);

        assert!(!token.is_cancelled());

        counter.fetch_add(1, Ordering::AcqRel);
        assert!(token.is_cancelled());
    }
}
