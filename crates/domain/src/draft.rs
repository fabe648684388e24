use chrono::{DateTime, Utc};

use crate::{
    Exercise, LoggedExercise, LoggedSet, PlanType, SessionID, WorkoutPlan, WorkoutSession, plan,
};

/// State of the workout currently being performed.
///
/// Nothing is persisted before [`Draft::finish`] turns the draft into a [`WorkoutSession`].
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Draft {
    #[default]
    SelectingPlan,
    InProgress(ActiveWorkout),
    Completed(WorkoutSession),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveWorkout {
    plan: &'static WorkoutPlan,
    exercise_idx: usize,
    exercises: Vec<LoggedExercise>,
    alternatives: Vec<Option<&'static str>>,
    start_time: DateTime<Utc>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DraftError {
    #[error("no plan for plan type {0}")]
    UnknownPlan(PlanType),
    #[error("no workout in progress")]
    NotInProgress,
    #[error("workout already in progress")]
    AlreadyInProgress,
    #[error("workout already completed")]
    AlreadyCompleted,
    #[error("exercise {0} does not exist")]
    ExerciseOutOfRange(usize),
    #[error("set {0} does not exist")]
    SetOutOfRange(usize),
    #[error("{0} is no alternative of {1}")]
    UnknownAlternative(String, &'static str),
    #[error("workout can only be finished on the last exercise")]
    NotOnLastExercise,
}

impl Draft {
    pub fn select_plan(
        &mut self,
        plan_type: PlanType,
        now: DateTime<Utc>,
    ) -> Result<&mut ActiveWorkout, DraftError> {
        match self {
            Draft::SelectingPlan => {}
            Draft::InProgress(_) => return Err(DraftError::AlreadyInProgress),
            Draft::Completed(_) => return Err(DraftError::AlreadyCompleted),
        }
        let plan = plan(plan_type).ok_or(DraftError::UnknownPlan(plan_type))?;
        *self = Draft::InProgress(ActiveWorkout::new(plan, now));
        self.active_mut()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveWorkout> {
        match self {
            Draft::InProgress(active) => Some(active),
            Draft::SelectingPlan | Draft::Completed(_) => None,
        }
    }

    pub fn active_mut(&mut self) -> Result<&mut ActiveWorkout, DraftError> {
        match self {
            Draft::InProgress(active) => Ok(active),
            Draft::SelectingPlan => Err(DraftError::NotInProgress),
            Draft::Completed(_) => Err(DraftError::AlreadyCompleted),
        }
    }

    /// Abandon the workout in progress and return to plan selection.
    pub fn discard(&mut self) -> Result<(), DraftError> {
        self.active_mut()?;
        *self = Draft::SelectingPlan;
        Ok(())
    }

    /// Return to plan selection, dropping any workout in progress.
    pub fn reset(&mut self) {
        *self = Draft::SelectingPlan;
    }

    /// Turn the workout into a completed session.
    ///
    /// Only possible while the last exercise is selected. The draft keeps a copy of the
    /// session, so a draft can be finished only once.
    pub fn finish(&mut self, now: DateTime<Utc>) -> Result<WorkoutSession, DraftError> {
        let active = self.active_mut()?;
        if !active.is_last_exercise() {
            return Err(DraftError::NotOnLastExercise);
        }
        let session = active.to_session(now);
        *self = Draft::Completed(session.clone());
        Ok(session)
    }
}

impl ActiveWorkout {
    fn new(plan: &'static WorkoutPlan, start_time: DateTime<Utc>) -> Self {
        Self {
            plan,
            exercise_idx: 0,
            exercises: plan
                .exercises
                .iter()
                .map(|e| LoggedExercise {
                    exercise_id: e.id.into(),
                    name: e.name.to_string(),
                    sets: vec![LoggedSet::default(); e.sets as usize],
                })
                .collect(),
            alternatives: vec![None; plan.exercises.len()],
            start_time,
        }
    }

    #[must_use]
    pub fn plan(&self) -> &'static WorkoutPlan {
        self.plan
    }

    #[must_use]
    pub fn exercise_idx(&self) -> usize {
        self.exercise_idx
    }

    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    #[must_use]
    pub fn exercises(&self) -> &[LoggedExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn current_exercise(&self) -> (&'static Exercise, &LoggedExercise) {
        (
            &self.plan.exercises[self.exercise_idx],
            &self.exercises[self.exercise_idx],
        )
    }

    #[must_use]
    pub fn alternative(&self, exercise_idx: usize) -> Option<&'static str> {
        self.alternatives.get(exercise_idx).copied().flatten()
    }

    /// An exercise counts as done as soon as one of its sets is completed.
    #[must_use]
    pub fn is_exercise_done(&self, exercise_idx: usize) -> bool {
        self.exercises
            .get(exercise_idx)
            .is_some_and(|e| e.sets.iter().any(|s| s.completed))
    }

    #[must_use]
    pub fn is_last_exercise(&self) -> bool {
        self.exercise_idx + 1 >= self.exercises.len()
    }

    pub fn update_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        set: LoggedSet,
    ) -> Result<(), DraftError> {
        let exercise = self
            .exercises
            .get_mut(exercise_idx)
            .ok_or(DraftError::ExerciseOutOfRange(exercise_idx))?;
        let logged_set = exercise
            .sets
            .get_mut(set_idx)
            .ok_or(DraftError::SetOutOfRange(set_idx))?;
        *logged_set = set;
        Ok(())
    }

    /// Perform an alternative instead of the planned exercise, or revert to the planned
    /// exercise if `alternative` is `None`.
    pub fn select_alternative(
        &mut self,
        exercise_idx: usize,
        alternative: Option<&str>,
    ) -> Result<(), DraftError> {
        let exercise = self
            .plan
            .exercise(exercise_idx)
            .ok_or(DraftError::ExerciseOutOfRange(exercise_idx))?;
        let selected = match alternative {
            Some(name) => Some(
                exercise
                    .alternatives
                    .iter()
                    .copied()
                    .find(|a| *a == name)
                    .ok_or_else(|| {
                        DraftError::UnknownAlternative(name.to_string(), exercise.name)
                    })?,
            ),
            None => None,
        };
        self.alternatives[exercise_idx] = selected;
        Ok(())
    }

    pub fn go_to(&mut self, exercise_idx: usize) -> Result<(), DraftError> {
        if exercise_idx >= self.exercises.len() {
            return Err(DraftError::ExerciseOutOfRange(exercise_idx));
        }
        self.exercise_idx = exercise_idx;
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), DraftError> {
        self.go_to(self.exercise_idx + 1)
    }

    pub fn previous(&mut self) -> Result<(), DraftError> {
        match self.exercise_idx.checked_sub(1) {
            Some(idx) => self.go_to(idx),
            None => Err(DraftError::ExerciseOutOfRange(0)),
        }
    }

    /// Elapsed time since the start of the workout in whole minutes, rounded.
    #[must_use]
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> u32 {
        let millis = (now - self.start_time).num_milliseconds().max(0);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let minutes = (millis as f64 / 60_000.0).round() as u32;
        minutes
    }

    fn to_session(&self, now: DateTime<Utc>) -> WorkoutSession {
        WorkoutSession {
            id: SessionID::from_time(now),
            date: now,
            plan_type: self.plan.plan_type,
            name: self.plan.name.to_string(),
            exercises: self
                .exercises
                .iter()
                .zip(&self.alternatives)
                .map(|(exercise, alternative)| LoggedExercise {
                    name: alternative.map_or_else(|| exercise.name.clone(), ToString::to_string),
                    ..exercise.clone()
                })
                .collect(),
            completed: true,
            duration: Some(self.elapsed_minutes(now)),
        }
    }
}
