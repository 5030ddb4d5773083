//! Bounded randomized perturbation of stored values.
//!
//! Each dashboard read passes the last stored value through one of these
//! functions to simulate live change. History is never rewritten: the metrics
//! endpoint appends the drifted sample as a new row, and drifted uptimes are
//! never written back at all.
//!
//! The RNG is a parameter so tests can drive the functions with a seeded
//! generator and assert bounds over many iterations.

use rand::Rng;
use serde::Serialize;

use crate::models::metric;

/// The externally visible shape of one metrics sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricReading {
    pub cpu: f64,
    pub memory: f64,
    pub requests: i64,
    pub errors: i64,
}

/// Reading reported when the store has no samples yet. No row is inserted in
/// that case.
pub fn default_reading() -> MetricReading {
    MetricReading {
        cpu: 45.0,
        memory: 62.0,
        requests: 1240,
        errors: 8,
    }
}

/// Derives the next sample from the previous one.
///
/// cpu stays within [20, 90] and memory within [30, 95]; `requests` grows by
/// at least 10 on every call, and `errors` drifts by at most one but never
/// goes negative.
pub fn next_metrics<R: Rng>(rng: &mut R, prev: &metric::Model) -> MetricReading {
    MetricReading {
        cpu: (prev.cpu + rng.gen_range(-5.0..=5.0)).clamp(20.0, 90.0),
        memory: (prev.memory + rng.gen_range(-4.0..=4.0)).clamp(30.0, 95.0),
        requests: prev.requests + rng.gen_range(10..=59),
        errors: (prev.errors + rng.gen_range(-1..=1)).max(0),
    }
}

/// Perturbs an uptime percentage by at most ±0.05, clamped to [0, 100] and
/// rounded to one decimal. The result is reported, not persisted.
pub fn next_uptime<R: Rng>(rng: &mut R, prev: f64) -> f64 {
    let drifted = (prev + rng.gen_range(-0.05..=0.05)).clamp(0.0, 100.0);
    (drifted * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(cpu: f64, memory: f64, requests: i64, errors: i64) -> metric::Model {
        metric::Model {
            id: 1,
            timestamp: Utc::now(),
            cpu,
            memory,
            requests,
            errors,
        }
    }

    #[test]
    fn default_reading_is_fixed() {
        let reading = default_reading();
        assert_eq!(reading.cpu, 45.0);
        assert_eq!(reading.memory, 62.0);
        assert_eq!(reading.requests, 1240);
        assert_eq!(reading.errors, 8);
    }

    #[test]
    fn next_metrics_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut prev = sample(45.0, 62.0, 1240, 8);

        for _ in 0..1000 {
            let next = next_metrics(&mut rng, &prev);
            assert!((20.0..=90.0).contains(&next.cpu));
            assert!((30.0..=95.0).contains(&next.memory));
            assert!(next.requests >= prev.requests + 10);
            assert!(next.requests <= prev.requests + 59);
            assert!(next.errors >= 0);
            assert!((next.errors - prev.errors).abs() <= 1);
            prev = sample(next.cpu, next.memory, next.requests, next.errors);
        }
    }

    #[test]
    fn next_metrics_clamps_out_of_range_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let hot = sample(100.0, 100.0, 0, 0);

        for _ in 0..100 {
            let next = next_metrics(&mut rng, &hot);
            assert!(next.cpu <= 90.0);
            assert!(next.memory <= 95.0);
            assert!(next.errors >= 0);
        }
    }

    #[test]
    fn next_uptime_is_bounded_and_rounded() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..1000 {
            let up = next_uptime(&mut rng, 99.9);
            assert!((99.8..=100.0).contains(&up));
            // One decimal place.
            assert_eq!((up * 10.0).round() / 10.0, up);
        }

        for _ in 0..100 {
            assert!(next_uptime(&mut rng, 100.0) <= 100.0);
            assert!(next_uptime(&mut rng, 0.0) >= 0.0);
        }
    }
}
