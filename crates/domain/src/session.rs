use chrono::{DateTime, Utc};
use derive_more::Display;

use crate::{
    DeleteError, PlanType, ProgressEntry, ReadError, Reps, SummaryStats, UpdateError, Weight,
    compute_summary_stats, exercise_progress,
};

#[allow(clippy::module_name_repetitions)]
pub trait SessionService {
    /// All stored sessions, newest first. Unreadable storage yields an empty list.
    fn get_sessions(&self) -> Vec<WorkoutSession>;
    fn save_session(&self, session: WorkoutSession) -> Result<WorkoutSession, UpdateError>;
    fn delete_session(&self, id: &SessionID) -> Result<SessionID, DeleteError>;
    fn clear_all_sessions(&self) -> Result<(), DeleteError>;

    #[must_use]
    fn get_summary_stats(&self) -> SummaryStats {
        compute_summary_stats(&self.get_sessions())
    }

    #[must_use]
    fn get_exercise_progress(&self, exercise_name: &str) -> Vec<ProgressEntry> {
        exercise_progress(&self.get_sessions(), exercise_name)
    }
}

#[allow(clippy::module_name_repetitions)]
pub trait SessionRepository {
    fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError>;
    fn write_session(&self, session: WorkoutSession) -> Result<WorkoutSession, UpdateError>;
    fn delete_session(&self, id: &SessionID) -> Result<SessionID, DeleteError>;
    fn delete_all_sessions(&self) -> Result<(), DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub id: SessionID,
    pub date: DateTime<Utc>,
    pub plan_type: PlanType,
    pub name: String,
    pub exercises: Vec<LoggedExercise>,
    pub completed: bool,
    pub duration: Option<u32>,
}

impl WorkoutSession {
    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .map(|e| e.completed_sets().count())
            .sum()
    }

    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&LoggedExercise> {
        self.exercises.iter().find(|e| e.name == name)
    }
}

/// Session identifier derived from the creation time in milliseconds since the Unix epoch.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionID(String);

impl SessionID {
    #[must_use]
    pub fn from_time(time: DateTime<Utc>) -> Self {
        Self(time.timestamp_millis().to_string())
    }
}

impl AsRef<str> for SessionID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedExercise {
    pub exercise_id: ExerciseID,
    pub name: String,
    pub sets: Vec<LoggedSet>,
}

impl LoggedExercise {
    pub fn completed_sets(&self) -> impl Iterator<Item = &LoggedSet> {
        self.sets.iter().filter(|s| s.completed)
    }

    /// The completed set with the highest weight, ties broken by the highest rep count.
    #[must_use]
    pub fn best_set(&self) -> Option<&LoggedSet> {
        self.completed_sets().fold(None, |best, set| match best {
            Some(b) if (b.weight, b.reps) >= (set.weight, set.reps) => Some(b),
            _ => Some(set),
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LoggedSet {
    pub weight: Weight,
    pub reps: Reps,
    pub completed: bool,
}

/// Insert `session` into a newest-first collection.
///
/// A session with the same identifier is replaced at its position, otherwise the session is
/// prepended.
pub fn insert_or_replace(sessions: &mut Vec<WorkoutSession>, session: WorkoutSession) {
    if let Some(existing) = sessions.iter_mut().find(|s| s.id == session.id) {
        *existing = session;
    } else {
        sessions.insert(0, session);
    }
}

/// Remove the session with identifier `id`. Returns whether a session was removed.
pub fn remove_session(sessions: &mut Vec<WorkoutSession>, id: &SessionID) -> bool {
    let len = sessions.len();
    sessions.retain(|s| s.id != *id);
    sessions.len() != len
}
