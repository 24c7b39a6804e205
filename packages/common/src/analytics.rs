//! Score aggregation for the dashboard and report views.
//!
//! Everything here is pure: callers fetch the records and pass slices in.
//! Scores are the raw `marks_obtained` values, not percentages.

use serde::Serialize;

use crate::records::{AssignmentSubmission, TestMarks};

/// Graded assignments below this score trigger a submission-quality suggestion.
pub const LOW_ASSIGNMENT_SCORE: f64 = 70.0;

/// Number of recent rows shown on the dashboard.
pub const RECENT_LIMIT: usize = 3;

/// Mean of `values`, or 0 for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to the nearest integer with halves going up.
pub fn round_score(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `marks / total * 100`.
pub fn percentage(marks_obtained: f64, total_marks: f64) -> f64 {
    marks_obtained * 100.0 / total_marks
}

/// Scores of graded assignments, in input order.
pub fn graded_scores(assignments: &[AssignmentSubmission]) -> Vec<f64> {
    assignments
        .iter()
        .filter(|a| a.status.is_graded())
        .map(|a| a.marks_obtained)
        .collect()
}

pub fn test_scores(tests: &[TestMarks]) -> Vec<f64> {
    tests.iter().map(|t| t.marks_obtained).collect()
}

/// Graded assignment scores followed by test scores.
pub fn all_scores(assignments: &[AssignmentSubmission], tests: &[TestMarks]) -> Vec<f64> {
    let mut scores = graded_scores(assignments);
    scores.extend(tests.iter().map(|t| t.marks_obtained));
    scores
}

/// Dashboard grade: one mean over every graded assignment and test.
pub fn dashboard_overall_grade(assignments: &[AssignmentSubmission], tests: &[TestMarks]) -> i64 {
    let scores = all_scores(assignments, tests);
    if scores.is_empty() {
        return 0;
    }
    round_score(average(&scores))
}

/// Report grade: assignments and tests weigh the same regardless of how many
/// of each there are.
pub fn report_overall_grade(assignment_average: f64, test_average: f64) -> i64 {
    let sum = assignment_average + test_average;
    if sum > 0.0 { round_score(sum / 2.0) } else { 0 }
}

/// Letter bucket for a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Counts of scores per grade, ordered `[A, B, C, D, F]`.
pub fn grade_distribution(scores: &[f64]) -> [u32; 5] {
    let mut buckets = [0u32; 5];
    for &score in scores {
        buckets[Grade::from_score(score).index()] += 1;
    }
    buckets
}

/// Rounded mean of the graded assignment and test scores recorded for one course.
pub fn course_performance(
    course_id: i32,
    assignments: &[AssignmentSubmission],
    tests: &[TestMarks],
) -> i64 {
    let scores: Vec<f64> = assignments
        .iter()
        .filter(|a| a.course_id == course_id && a.status.is_graded())
        .map(|a| a.marks_obtained)
        .chain(
            tests
                .iter()
                .filter(|t| t.course_id == course_id)
                .map(|t| t.marks_obtained),
        )
        .collect();
    if scores.is_empty() {
        return 0;
    }
    round_score(average(&scores))
}

/// Share of submissions that have been graded, as a rounded percentage.
pub fn completion_rate(graded: usize, total: usize) -> i64 {
    round_score(graded as f64 / total.max(1) as f64 * 100.0)
}

/// Courses whose progress reached 100.
///
/// A `None` progress never counts, so courses without a progress value are
/// neither completed nor active.
pub fn count_completed(progress: impl IntoIterator<Item = Option<u8>>) -> usize {
    progress.into_iter().filter(|p| *p == Some(100)).count()
}

/// Courses with a known progress below 100.
pub fn count_active(progress: impl IntoIterator<Item = Option<u8>>) -> usize {
    progress
        .into_iter()
        .filter(|p| matches!(p, Some(v) if *v < 100))
        .count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A study suggestion shown on the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ImprovementArea {
    #[schema(example = "Review Mid-term Assessment concepts")]
    pub topic: String,
    pub priority: Priority,
    #[schema(example = "Advanced Web Development")]
    pub course: String,
}

impl ImprovementArea {
    fn new(topic: impl Into<String>, priority: Priority, course: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            priority,
            course: course.into(),
        }
    }
}

/// Suggest what to work on.
///
/// The lowest test (first one on ties) yields a review suggestion for its
/// course, resolved through `course_name` with `General` as the fallback.
/// Any graded assignment under [`LOW_ASSIGNMENT_SCORE`] adds a general
/// submission-quality suggestion. When neither applies, two fixed
/// suggestions are returned.
pub fn improvement_areas<F>(
    assignments: &[AssignmentSubmission],
    tests: &[TestMarks],
    course_name: F,
) -> Vec<ImprovementArea>
where
    F: Fn(i32) -> Option<String>,
{
    let mut areas = Vec::new();

    let lowest = tests.iter().reduce(|lowest, test| {
        if test.marks_obtained < lowest.marks_obtained {
            test
        } else {
            lowest
        }
    });
    if let Some(test) = lowest {
        areas.push(ImprovementArea::new(
            format!("Review {} concepts", test.test_name),
            Priority::High,
            course_name(test.course_id).unwrap_or_else(|| "General".to_string()),
        ));
    }

    let has_low_assignment = assignments
        .iter()
        .any(|a| a.status.is_graded() && a.marks_obtained < LOW_ASSIGNMENT_SCORE);
    if has_low_assignment {
        areas.push(ImprovementArea::new(
            "Improve assignment submission quality",
            Priority::Medium,
            "All Courses",
        ));
    }

    if areas.is_empty() {
        areas.push(ImprovementArea::new(
            "Advanced problem solving",
            Priority::Medium,
            "All Courses",
        ));
        areas.push(ImprovementArea::new(
            "Time management in tests",
            Priority::Low,
            "All Courses",
        ));
    }

    areas
}
