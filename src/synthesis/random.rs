use rand::rngs::OsRng;
use rand::RngCore;

/// Uniform sampling seam for the planners.
///
/// Production uses OS entropy so event timing cannot be inferred from a
/// seeded generator; tests substitute a scripted source to pin sequences.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[min, max]` inclusive.
    fn uniform_int(&self, min: i64, max: i64) -> i64;

    /// Uniform value in `[min, max]` with two-decimal granularity.
    fn uniform_float(&self, min: f64, max: f64) -> f64 {
        let span = ((max - min) * 100.0).round() as i64;
        min + self.uniform_int(0, span) as f64 / 100.0
    }
}

/// OS-entropy backed source. When the entropy source errors the sample
/// degrades to `min` (zero jitter), never to a caller-visible failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyRandom;

impl RandomSource for EntropyRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = (max - min + 1) as u64;
        let mut buf = [0u8; 8];
        if OsRng.try_fill_bytes(&mut buf).is_err() {
            return min;
        }
        min + (u64::from_le_bytes(buf) % span) as i64
    }
}

/// Replays a fixed list of draws; exhausted or out-of-range draws clamp.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: std::sync::Mutex<std::collections::VecDeque<i64>>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = i64>>(values: I) -> Self {
        Self {
            values: std::sync::Mutex::new(values.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        self.values
            .lock()
            .unwrap()
            .pop_front()
            .map(|v| v.clamp(min, max))
            .unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_int_stays_in_closed_interval() {
        let random = EntropyRandom;
        for _ in 0..500 {
            let v = random.uniform_int(-2, 2);
            assert!((-2..=2).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn degenerate_interval_returns_min() {
        let random = EntropyRandom;
        assert_eq!(random.uniform_int(7, 7), 7);
        assert_eq!(random.uniform_int(7, 3), 7);
    }

    #[test]
    fn uniform_float_has_two_decimal_granularity() {
        let random = EntropyRandom;
        for _ in 0..200 {
            let v = random.uniform_float(0.5, 1.5);
            assert!((0.5..=1.5).contains(&v), "out of range: {v}");
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "granularity: {v}");
        }
    }

    #[test]
    fn scripted_source_replays_and_clamps() {
        let random = ScriptedRandom::new([5, 100, -7]);
        assert_eq!(random.uniform_int(0, 10), 5);
        assert_eq!(random.uniform_int(0, 10), 10);
        assert_eq!(random.uniform_int(0, 10), 0);
        // exhausted
        assert_eq!(random.uniform_int(3, 10), 3);
    }
}
