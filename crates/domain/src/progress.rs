use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::{Reps, Weight, WorkoutSession};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStats {
    pub total_workouts: usize,
    pub this_week: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEntry {
    pub date: DateTime<Utc>,
    pub weight: Weight,
    pub reps: Reps,
}

/// Summary of the completed sessions relative to the current time.
///
/// The result depends on the wall clock, so repeated calls may differ.
#[must_use]
pub fn compute_summary_stats(sessions: &[WorkoutSession]) -> SummaryStats {
    compute_summary_stats_at(sessions, Utc::now())
}

/// Summary of the completed sessions relative to `now`.
///
/// A session belongs to the current week if its timestamp is not older than seven days.
#[must_use]
pub fn compute_summary_stats_at(sessions: &[WorkoutSession], now: DateTime<Utc>) -> SummaryStats {
    let week_ago = now - Duration::days(7);
    let completed = sessions.iter().filter(|s| s.completed);
    SummaryStats {
        total_workouts: completed.clone().count(),
        this_week: completed.filter(|s| s.date >= week_ago).count(),
    }
}

/// Best set of an exercise per session, oldest session first.
///
/// `sessions` are expected in storage order (newest first). For each session the first logged
/// exercise named `exercise_name` is considered and its completed set with the highest weight
/// (ties broken by reps) is selected. Sessions without such a set are skipped.
#[must_use]
pub fn exercise_progress(sessions: &[WorkoutSession], exercise_name: &str) -> Vec<ProgressEntry> {
    sessions
        .iter()
        .rev()
        .filter_map(|session| {
            let best_set = session.exercise(exercise_name)?.best_set()?;
            Some(ProgressEntry {
                date: session.date,
                weight: best_set.weight,
                reps: best_set.reps,
            })
        })
        .collect()
}

/// Number of completed sessions per plan display name.
#[must_use]
pub fn workout_type_counts(sessions: &[WorkoutSession]) -> BTreeMap<String, usize> {
    let mut result: BTreeMap<String, usize> = BTreeMap::new();
    for session in sessions.iter().filter(|s| s.completed) {
        *result.entry(session.name.clone()).or_insert(0) += 1;
    }
    result
}

/// Distinct names of all logged exercises in order of first occurrence.
#[must_use]
pub fn exercise_names(sessions: &[WorkoutSession]) -> Vec<String> {
    let mut seen = HashSet::new();
    sessions
        .iter()
        .flat_map(|s| s.exercises.iter().map(|e| e.name.as_str()))
        .filter(|name| seen.insert(*name))
        .map(ToString::to_string)
        .collect()
}
