use std::ops::Range;

use rand::Rng;

/// Simulated course progress, in percent. Never reaches 100.
pub const PROGRESS_RANGE: Range<u8> = 70..100;

/// Simulated weekly study hours.
pub const STUDY_HOURS_RANGE: Range<u32> = 20..70;

/// Source of the display-only metrics that are not tracked yet.
///
/// Values are drawn per request; nothing is persisted.
pub trait MetricSource: Send + Sync {
    fn course_progress(&self) -> u8;
    fn study_hours(&self) -> u32;
}

/// Uniformly random metrics within [`PROGRESS_RANGE`] and [`STUDY_HOURS_RANGE`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomMetrics;

impl MetricSource for RandomMetrics {
    fn course_progress(&self) -> u8 {
        rand::rng().random_range(PROGRESS_RANGE)
    }

    fn study_hours(&self) -> u32 {
        rand::rng().random_range(STUDY_HOURS_RANGE)
    }
}

/// Constant metrics, for deterministic output.
#[derive(Clone, Copy, Debug)]
pub struct FixedMetrics {
    pub progress: u8,
    pub study_hours: u32,
}

impl MetricSource for FixedMetrics {
    fn course_progress(&self) -> u8 {
        self.progress
    }

    fn study_hours(&self) -> u32 {
        self.study_hours
    }
}
