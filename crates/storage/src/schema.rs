use std::str::FromStr;

use chrono::{DateTime, Utc};
use liftlog_domain as domain;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Sessions(pub Vec<Session>);

impl From<&[domain::WorkoutSession]> for Sessions {
    fn from(value: &[domain::WorkoutSession]) -> Self {
        Self(value.iter().map(Session::from).collect())
    }
}

impl TryFrom<Sessions> for Vec<domain::WorkoutSession> {
    type Error = SchemaError;

    fn try_from(value: Sessions) -> Result<Self, Self::Error> {
        value
            .0
            .into_iter()
            .map(domain::WorkoutSession::try_from)
            .collect()
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub type_name: String,
    pub exercises: Vec<LoggedExercise>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl From<domain::WorkoutSession> for Session {
    fn from(value: domain::WorkoutSession) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::WorkoutSession> for Session {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            id: value.id.to_string(),
            date: value.date,
            plan_type: value.plan_type.to_string(),
            type_name: value.name.clone(),
            exercises: value.exercises.iter().map(LoggedExercise::from).collect(),
            completed: value.completed,
            duration: value.duration,
        }
    }
}

impl TryFrom<Session> for domain::WorkoutSession {
    type Error = SchemaError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        Ok(Self {
            plan_type: domain::PlanType::from_str(&value.plan_type)
                .map_err(|_| SchemaError::UnknownPlanType(value.plan_type.clone()))?,
            id: value.id.into(),
            date: value.date,
            name: value.type_name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::LoggedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            completed: value.completed,
            duration: value.duration,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: Vec<LoggedSet>,
}

impl From<&domain::LoggedExercise> for LoggedExercise {
    fn from(value: &domain::LoggedExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            name: value.name.clone(),
            sets: value.sets.iter().map(LoggedSet::from).collect(),
        }
    }
}

impl TryFrom<LoggedExercise> for domain::LoggedExercise {
    type Error = SchemaError;

    fn try_from(value: LoggedExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            name: value.name,
            sets: value
                .sets
                .into_iter()
                .map(domain::LoggedSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LoggedSet {
    pub weight: f32,
    pub reps: u32,
    pub completed: bool,
}

impl From<&domain::LoggedSet> for LoggedSet {
    fn from(value: &domain::LoggedSet) -> Self {
        Self {
            weight: f32::from(value.weight),
            reps: u32::from(value.reps),
            completed: value.completed,
        }
    }
}

impl TryFrom<LoggedSet> for domain::LoggedSet {
    type Error = SchemaError;

    fn try_from(value: LoggedSet) -> Result<Self, Self::Error> {
        Ok(Self {
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps),
            completed: value.completed,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("unknown plan type \"{0}\"")]
    UnknownPlanType(String),
    #[error("invalid weight: {0}")]
    InvalidWeight(#[from] domain::WeightError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub start_weight: f32,
    pub current_weight: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f32>,
}

impl From<&domain::UserProfile> for Profile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            name: value.name.clone(),
            start_weight: value.start_weight,
            current_weight: value.current_weight,
            target_weight: value.target_weight,
        }
    }
}

impl From<Profile> for domain::UserProfile {
    fn from(value: Profile) -> Self {
        Self {
            name: value.name,
            start_weight: value.start_weight,
            current_weight: value.current_weight,
            target_weight: value.target_weight,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub rest_timer_default: u32,
}

impl From<&domain::AppSettings> for Settings {
    fn from(value: &domain::AppSettings) -> Self {
        Self {
            sound_enabled: value.sound_enabled,
            rest_timer_default: value.rest_timer_default,
        }
    }
}

impl From<Settings> for domain::AppSettings {
    fn from(value: Settings) -> Self {
        Self {
            sound_enabled: value.sound_enabled,
            rest_timer_default: value.rest_timer_default,
        }
    }
}
