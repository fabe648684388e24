use chrono::{TimeZone, Utc};
use liftlog_domain as domain;

pub static SESSIONS: std::sync::LazyLock<Vec<domain::WorkoutSession>> =
    std::sync::LazyLock::new(|| vec![SESSION.clone(), SESSION_2.clone()]);

pub static SESSION: std::sync::LazyLock<domain::WorkoutSession> =
    std::sync::LazyLock::new(|| domain::WorkoutSession {
        id: "1718474400000".into(),
        date: Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap(),
        plan_type: domain::PlanType::Push,
        name: "Push".to_string(),
        exercises: vec![
            domain::LoggedExercise {
                exercise_id: "push-incline-dumbbell-press".into(),
                name: "Incline Dumbbell Press".to_string(),
                sets: vec![set(32.5, 10, true), set(35.0, 8, true), set(0.0, 0, false)],
            },
            domain::LoggedExercise {
                exercise_id: "push-cable-flyes".into(),
                name: "Pec Deck".to_string(),
                sets: vec![set(60.0, 12, true)],
            },
        ],
        completed: true,
        duration: Some(52),
    });

pub static SESSION_2: std::sync::LazyLock<domain::WorkoutSession> =
    std::sync::LazyLock::new(|| domain::WorkoutSession {
        id: "1718215200000".into(),
        date: Utc.with_ymd_and_hms(2024, 6, 12, 18, 0, 0).unwrap(),
        plan_type: domain::PlanType::Legs,
        name: "Legs".to_string(),
        exercises: vec![domain::LoggedExercise {
            exercise_id: "legs-hack-squat".into(),
            name: "Hack Squat".to_string(),
            sets: vec![set(100.0, 10, true), set(110.0, 8, true)],
        }],
        completed: true,
        duration: None,
    });

pub static PROFILE: std::sync::LazyLock<domain::UserProfile> =
    std::sync::LazyLock::new(|| domain::UserProfile {
        name: "Alex".to_string(),
        start_weight: 95.5,
        current_weight: 88.0,
        target_weight: Some(80.0),
    });

pub const SETTINGS: domain::AppSettings = domain::AppSettings {
    sound_enabled: false,
    rest_timer_default: 120,
};

fn set(weight: f32, reps: u32, completed: bool) -> domain::LoggedSet {
    domain::LoggedSet {
        weight: domain::Weight::new(weight).unwrap(),
        reps: domain::Reps::new(reps),
        completed,
    }
}
