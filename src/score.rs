use serde::Serialize;

use crate::models::HeartRateSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleStats {
    pub count: usize,
    pub avg: i32,
    pub min: i32,
    pub max: i32,
}

impl SampleStats {
    /// Average truncates toward zero. An empty series yields all zeros.
    pub fn from_samples(samples: &[HeartRateSample]) -> Self {
        let count = samples.len();
        let sum: i64 = samples.iter().map(|s| s.value as i64).sum();
        let avg = (sum / count.max(1) as i64) as i32;
        let min = samples.iter().map(|s| s.value).min().unwrap_or(0);
        let max = samples.iter().map(|s| s.value).max().unwrap_or(0);
        Self { count, avg, min, max }
    }
}

/// `round(0.6 * avg + 0.3 * max + 0.1 * min)`, halves rounded away from zero.
pub fn compute_score(avg: i32, min: i32, max: i32) -> i32 {
    let score = avg as f64 * 0.6 + max as f64 * 0.3 + min as f64 * 0.1;
    score.round() as i32
}

/// `None` when there is nothing to score.
pub fn training_score(samples: &[HeartRateSample]) -> Option<i32> {
    if samples.is_empty() {
        return None;
    }
    let stats = SampleStats::from_samples(samples);
    Some(compute_score(stats.avg, stats.min, stats.max))
}
