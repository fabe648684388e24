use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use crate::{
    AppSettings, DeleteError, Draft, DraftError, ProfileRepository, ProfileService, ReadError,
    SessionID, SessionRepository, SessionService, SettingsRepository, SettingsService,
    UpdateError, UserProfile, WorkoutSession,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: SessionRepository> Service<R> {
    /// Finish the workout of `draft` and store the resulting session.
    ///
    /// The draft is completed even if storing fails, so a session is handed to the
    /// repository at most once per draft.
    pub fn finish_workout(
        &self,
        draft: &mut Draft,
        now: DateTime<Utc>,
    ) -> Result<WorkoutSession, FinishError> {
        let session = draft.finish(now)?;
        Ok(self.save_session(session)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FinishError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Update(#[from] UpdateError),
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoStorage) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

macro_rules! or_default {
    ($result: expr, $entity: literal) => {{
        match $result {
            Ok(value) => value,
            Err(_) => {
                warn!("using default {}", $entity);
                Default::default()
            }
        }
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    fn get_sessions(&self) -> Vec<WorkoutSession> {
        or_default!(
            log_on_error!(self.repository.read_sessions(), ReadError, "get", "sessions"),
            "sessions"
        )
    }

    fn save_session(&self, session: WorkoutSession) -> Result<WorkoutSession, UpdateError> {
        log_on_error!(
            self.repository.write_session(session),
            UpdateError,
            "save",
            "session"
        )
    }

    fn delete_session(&self, id: &SessionID) -> Result<SessionID, DeleteError> {
        log_on_error!(
            self.repository.delete_session(id),
            DeleteError,
            "delete",
            "session"
        )
    }

    fn clear_all_sessions(&self) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.delete_all_sessions(),
            DeleteError,
            "clear",
            "sessions"
        )
    }
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    fn get_profile(&self) -> UserProfile {
        or_default!(
            log_on_error!(self.repository.read_profile(), ReadError, "get", "profile"),
            "profile"
        )
    }

    fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, UpdateError> {
        log_on_error!(
            self.repository.write_profile(profile),
            UpdateError,
            "save",
            "profile"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    fn get_settings(&self) -> AppSettings {
        or_default!(
            log_on_error!(self.repository.read_settings(), ReadError, "get", "settings"),
            "settings"
        )
    }

    fn save_settings(&self, settings: AppSettings) -> Result<AppSettings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "save",
            "settings"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{PlanType, StorageError, insert_or_replace, remove_session};

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        sessions: RefCell<Vec<WorkoutSession>>,
        profile: RefCell<Option<UserProfile>>,
        writes: RefCell<u32>,
        broken: bool,
    }

    impl FakeRepository {
        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }

        fn check(&self) -> Result<(), StorageError> {
            if self.broken {
                Err(StorageError::Decode("invalid type: string, expected a sequence".into()))
            } else {
                Ok(())
            }
        }
    }

    impl SessionRepository for FakeRepository {
        fn read_sessions(&self) -> Result<Vec<WorkoutSession>, ReadError> {
            self.check()?;
            Ok(self.sessions.borrow().clone())
        }

        fn write_session(&self, session: WorkoutSession) -> Result<WorkoutSession, UpdateError> {
            self.check()?;
            *self.writes.borrow_mut() += 1;
            insert_or_replace(&mut self.sessions.borrow_mut(), session.clone());
            Ok(session)
        }

        fn delete_session(&self, id: &SessionID) -> Result<SessionID, DeleteError> {
            self.check()?;
            remove_session(&mut self.sessions.borrow_mut(), id);
            Ok(id.clone())
        }

        fn delete_all_sessions(&self) -> Result<(), DeleteError> {
            Err(StorageError::NoStorage.into())
        }
    }

    impl ProfileRepository for FakeRepository {
        fn read_profile(&self) -> Result<UserProfile, ReadError> {
            self.check()?;
            Ok(self.profile.borrow().clone().unwrap_or_default())
        }

        fn write_profile(&self, profile: UserProfile) -> Result<UserProfile, UpdateError> {
            self.check()?;
            *self.profile.borrow_mut() = Some(profile.clone());
            Ok(profile)
        }
    }

    impl SettingsRepository for FakeRepository {
        fn read_settings(&self) -> Result<AppSettings, ReadError> {
            Err(StorageError::NoStorage.into())
        }

        fn write_settings(&self, _: AppSettings) -> Result<AppSettings, UpdateError> {
            Err(StorageError::NoStorage.into())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap()
    }

    fn draft_on_last_exercise() -> Draft {
        let mut draft = Draft::default();
        draft
            .select_plan(PlanType::Push, now())
            .unwrap()
            .go_to(6)
            .unwrap();
        draft
    }

    #[test]
    fn test_finish_workout_saves_session_once() {
        let service = Service::new(FakeRepository::default());
        let mut draft = draft_on_last_exercise();

        let session = service.finish_workout(&mut draft, now()).unwrap();

        assert_eq!(service.get_sessions(), vec![session]);
        assert!(matches!(
            service.finish_workout(&mut draft, now()),
            Err(FinishError::Draft(DraftError::AlreadyCompleted))
        ));
        assert_eq!(*service.repository.writes.borrow(), 1);
    }

    #[test]
    fn test_finish_workout_not_on_last_exercise() {
        let service = Service::new(FakeRepository::default());
        let mut draft = Draft::default();
        draft.select_plan(PlanType::Push, now()).unwrap();

        assert!(matches!(
            service.finish_workout(&mut draft, now()),
            Err(FinishError::Draft(DraftError::NotOnLastExercise))
        ));
        assert!(service.get_sessions().is_empty());
    }

    #[test]
    fn test_finish_workout_storage_failure() {
        let service = Service::new(FakeRepository::broken());
        let mut draft = draft_on_last_exercise();

        assert!(matches!(
            service.finish_workout(&mut draft, now()),
            Err(FinishError::Update(UpdateError::Storage(
                StorageError::Decode(_)
            )))
        ));
        assert!(matches!(draft, Draft::Completed(_)));
    }

    #[test]
    fn test_unreadable_storage_degrades_to_defaults() {
        let service = Service::new(FakeRepository::broken());

        assert!(service.get_sessions().is_empty());
        assert_eq!(service.get_profile(), UserProfile::default());
        assert_eq!(service.get_settings(), AppSettings::default());
        assert_eq!(service.get_summary_stats().total_workouts, 0);
        assert!(service.get_exercise_progress("Cable Flyes").is_empty());
    }

    #[test]
    fn test_write_errors_are_returned() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            service.clear_all_sessions(),
            Err(DeleteError::Storage(StorageError::NoStorage))
        ));
        assert!(matches!(
            service.save_settings(AppSettings::default()),
            Err(UpdateError::Storage(StorageError::NoStorage))
        ));
    }

    #[test]
    fn test_save_profile() {
        let service = Service::new(FakeRepository::default());
        let profile = UserProfile {
            name: "Alex".to_string(),
            start_weight: 90.0,
            current_weight: -1.0,
            target_weight: Some(80.0),
        };

        assert_eq!(service.save_profile(profile.clone()).unwrap(), profile);
        assert_eq!(service.get_profile(), profile);
    }

    #[test]
    fn test_delete_session() {
        let service = Service::new(FakeRepository::default());
        let mut draft = draft_on_last_exercise();
        let session = service.finish_workout(&mut draft, now()).unwrap();

        assert_eq!(service.delete_session(&session.id).unwrap(), session.id);
        assert_eq!(service.delete_session(&session.id).unwrap(), session.id);
        assert!(service.get_sessions().is_empty());
    }
}
