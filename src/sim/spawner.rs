//! Spawn throttling and live-entity caps

use serde::{Deserialize, Serialize};

/// Rate limiter for one entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Throttle {
    /// Minimum time between spawns (ms)
    pub min_interval_ms: f64,
    /// Timestamp of the last successful spawn
    last_spawn_ms: Option<f64>,
}

impl Throttle {
    pub fn new(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_spawn_ms: None,
        }
    }

    /// Returns true (and records `now_ms`) if a spawn is allowed now.
    /// The very first attempt always fires.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        let ready = match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms - last >= self.min_interval_ms,
        };
        if ready {
            self.last_spawn_ms = Some(now_ms);
        }
        ready
    }

    pub fn last_spawn_ms(&self) -> Option<f64> {
        self.last_spawn_ms
    }
}

/// Append `item`, then evict the oldest entries until `cap` holds.
/// Returns how many entries were evicted.
pub fn push_capped<T>(items: &mut Vec<T>, item: T, cap: Option<usize>) -> usize {
    items.push(item);
    match cap {
        Some(cap) if items.len() > cap => {
            let excess = items.len() - cap;
            items.drain(..excess);
            excess
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_blocks_within_interval() {
        let mut t = Throttle::new(500.0);
        assert!(t.try_fire(1000.0));
        assert!(!t.try_fire(1200.0));
        assert!(!t.try_fire(1499.9));
        assert!(t.try_fire(1500.0));
        assert_eq!(t.last_spawn_ms(), Some(1500.0));
    }

    #[test]
    fn test_blocked_attempt_does_not_reset_clock() {
        let mut t = Throttle::new(100.0);
        assert!(t.try_fire(0.0));
        assert!(!t.try_fire(90.0));
        assert!(t.try_fire(100.0));
    }

    #[test]
    fn test_zero_interval_always_fires() {
        let mut t = Throttle::new(0.0);
        assert!(t.try_fire(5.0));
        assert!(t.try_fire(5.0));
    }

    #[test]
    fn test_cap_keeps_newest() {
        let mut items = Vec::new();
        for i in 0..20 {
            push_capped(&mut items, i, Some(15));
        }
        assert_eq!(items.len(), 15);
        assert_eq!(items, (5..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_uncapped_grows() {
        let mut items = Vec::new();
        for i in 0..20 {
            assert_eq!(push_capped(&mut items, i, None), 0);
        }
        assert_eq!(items.len(), 20);
    }

    #[test]
    fn test_zero_cap_keeps_nothing() {
        let mut items = vec![1, 2];
        assert_eq!(push_capped(&mut items, 3, Some(0)), 3);
        assert!(items.is_empty());
    }
}
