#![warn(clippy::pedantic)]

use chrono::{NaiveTime, Timelike};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod log;
#[cfg(target_arch = "wasm32")]
pub mod ticker;

/// Adjustments of the rest timer offered next to the countdown, in seconds.
pub const REST_TIMER_ADJUSTMENTS: [i32; 3] = [-15, 15, 30];

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    Workout,
    Plans,
    Progress,
    Settings,
}

impl Tab {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Workout => "Workout",
            Tab::Plans => "Plans",
            Tab::Progress => "Progress",
            Tab::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Workout => "Start Workout",
            tab => tab.label(),
        }
    }

    /// Tab shown after a workout has been finished.
    #[must_use]
    pub fn after_workout() -> Self {
        Tab::Progress
    }
}

/// Greeting for the time of day, addressed to `name` if it is not empty.
#[must_use]
pub fn greeting(time: NaiveTime, name: &str) -> String {
    let greeting = match time.hour() {
        0..12 => "Good morning",
        12..18 => "Good afternoon",
        _ => "Good evening",
    };
    if name.is_empty() {
        greeting.to_string()
    } else {
        format!("{greeting}, {name}")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_tab_order() {
        assert_eq!(
            Tab::iter().map(Tab::label).collect::<Vec<_>>(),
            vec!["Workout", "Plans", "Progress", "Settings"]
        );
        assert_eq!(Tab::default(), Tab::Workout);
    }

    #[rstest]
    #[case(Tab::Workout, "workout", "Start Workout")]
    #[case(Tab::Plans, "plans", "Plans")]
    #[case(Tab::Progress, "progress", "Progress")]
    #[case(Tab::Settings, "settings", "Settings")]
    fn test_tab(#[case] tab: Tab, #[case] id: &str, #[case] title: &str) {
        assert_eq!(tab.as_ref(), id);
        assert_eq!(Tab::from_str(id), Ok(tab));
        assert_eq!(tab.title(), title);
    }

    #[rstest]
    #[case(NaiveTime::from_hms_opt(6, 30, 0).unwrap(), "Alex", "Good morning, Alex")]
    #[case(NaiveTime::from_hms_opt(11, 59, 59).unwrap(), "Alex", "Good morning, Alex")]
    #[case(NaiveTime::from_hms_opt(12, 0, 0).unwrap(), "User", "Good afternoon, User")]
    #[case(NaiveTime::from_hms_opt(18, 0, 0).unwrap(), "User", "Good evening, User")]
    #[case(NaiveTime::from_hms_opt(23, 15, 0).unwrap(), "", "Good evening")]
    fn test_greeting(#[case] time: NaiveTime, #[case] name: &str, #[case] expected: &str) {
        assert_eq!(greeting(time, name), expected);
    }
}
