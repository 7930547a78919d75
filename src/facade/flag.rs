//! Enable switch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Atomic on/off switch read by every logging call.
#[derive(Debug)]
pub struct EnableFlag {
    enabled: AtomicBool,
}

impl EnableFlag {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    /// Seeded from the build profile: on in debug builds, off in release.
    pub fn from_build() -> Self {
        Self::new(cfg!(debug_assertions))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Flip the switch and return the new value.
    pub fn toggle(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::Relaxed)
    }
}

impl Default for EnableFlag {
    fn default() -> Self {
        Self::from_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_returns_new_value() {
        let flag = EnableFlag::new(false);
        assert!(flag.toggle());
        assert!(flag.is_enabled());
        assert!(!flag.toggle());
        assert!(!flag.is_enabled());
    }

    #[test]
    fn test_from_build() {
        assert_eq!(EnableFlag::from_build().is_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn test_concurrent_toggles() {
        let flag = std::sync::Arc::new(EnableFlag::new(true));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let flag = flag.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        flag.toggle();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        // 8000 flips: even, so back where it started.
        assert!(flag.is_enabled());
    }
}
