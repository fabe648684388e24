use crate::{ReadError, UpdateError};

pub trait ProfileService {
    /// The stored profile, or the default profile if none can be read.
    fn get_profile(&self) -> UserProfile;
    fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, UpdateError>;
}

pub trait ProfileRepository {
    fn read_profile(&self) -> Result<UserProfile, ReadError>;
    fn write_profile(&self, profile: UserProfile) -> Result<UserProfile, UpdateError>;
}

/// Body weights are given in kilograms and are not range checked.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub start_weight: f32,
    pub current_weight: f32,
    pub target_weight: Option<f32>,
}

impl UserProfile {
    #[must_use]
    pub fn weight_lost(&self) -> f32 {
        self.start_weight - self.current_weight
    }

    #[must_use]
    pub fn weight_to_target(&self) -> Option<f32> {
        self.target_weight.map(|target| self.current_weight - target)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::from("User"),
            start_weight: 131.0,
            current_weight: 112.0,
            target_weight: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_user_profile_default() {
        assert_eq!(
            UserProfile::default(),
            UserProfile {
                name: "User".to_string(),
                start_weight: 131.0,
                current_weight: 112.0,
                target_weight: None,
            }
        );
    }

    #[rstest]
    #[case(131.0, 112.0, 19.0)]
    #[case(80.0, 80.0, 0.0)]
    #[case(70.0, 72.5, -2.5)]
    fn test_user_profile_weight_lost(
        #[case] start_weight: f32,
        #[case] current_weight: f32,
        #[case] expected: f32,
    ) {
        let profile = UserProfile {
            start_weight,
            current_weight,
            ..UserProfile::default()
        };
        assert_approx_eq!(profile.weight_lost(), expected);
    }

    #[test]
    fn test_user_profile_weight_to_target() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.weight_to_target(), None);
        profile.target_weight = Some(100.0);
        assert_eq!(profile.weight_to_target(), Some(12.0));
    }
}
