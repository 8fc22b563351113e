//! Timers for debounced UI work.

/// Hands out tickets; only the newest one is still current.
///
/// Each keystroke arms a ticket and sleeps; work runs only if no newer
/// keystroke armed another ticket meanwhile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    pub fn arm(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let mut debounce = Debounce::default();
        let first = debounce.arm();
        let second = debounce.arm();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }
}
