use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PlanType {
    Push,
    Pull,
    Legs,
    UpperHybrid,
}

#[derive(Debug, PartialEq)]
pub struct WorkoutPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub plan_type: PlanType,
    pub exercises: &'static [Exercise],
}

#[derive(Debug, PartialEq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
    pub notes: Option<&'static str>,
    pub alternatives: &'static [&'static str],
}

const DEFAULT_REST_SECONDS: u32 = 90;

impl Exercise {
    /// Rest duration in seconds.
    ///
    /// The first number in the rest text is used, interpreted as minutes if the text mentions
    /// `min` and as seconds otherwise. Texts without a number that fits in `u32` fall back to
    /// 90 s.
    #[must_use]
    pub fn rest_seconds(&self) -> u32 {
        let digits = self
            .rest
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect::<String>();
        match digits.parse::<u32>() {
            Ok(value) if self.rest.contains("min") => value.saturating_mul(60),
            Ok(value) => value,
            Err(_) => DEFAULT_REST_SECONDS,
        }
    }

    #[must_use]
    pub fn has_alternative(&self, name: &str) -> bool {
        self.alternatives.contains(&name)
    }
}

impl WorkoutPlan {
    #[must_use]
    pub fn exercise(&self, idx: usize) -> Option<&'static Exercise> {
        self.exercises.get(idx)
    }
}

#[must_use]
pub fn plans() -> &'static [WorkoutPlan] {
    PLANS
}

#[must_use]
pub fn plan(plan_type: PlanType) -> Option<&'static WorkoutPlan> {
    PLANS.iter().find(|p| p.plan_type == plan_type)
}

const fn ex(
    id: &'static str,
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
    alternatives: &'static [&'static str],
) -> Exercise {
    Exercise {
        id,
        name,
        sets,
        reps,
        rest,
        notes: None,
        alternatives,
    }
}

const fn with_notes(exercise: Exercise, notes: &'static str) -> Exercise {
    Exercise {
        notes: Some(notes),
        ..exercise
    }
}

static PLANS: &[WorkoutPlan] = &[
    WorkoutPlan {
        id: "push",
        name: "Push",
        plan_type: PlanType::Push,
        exercises: &[
            ex(
                "push-incline-dumbbell-press",
                "Incline Dumbbell Press",
                4,
                "8-10",
                "90s",
                &["Barbell Incline Press", "Machine Incline Press"],
            ),
            ex(
                "push-chest-press-machine",
                "Chest Press Machine",
                3,
                "10-12",
                "90s",
                &["Flat Dumbbell Press", "Cable Chest Press"],
            ),
            ex(
                "push-seated-dumbbell-press",
                "Seated Dumbbell Press",
                3,
                "8-10",
                "90s",
                &["Military Press", "Machine Shoulder Press"],
            ),
            ex(
                "push-lateral-raises",
                "Lateral Raises",
                4,
                "12-15",
                "60s",
                &["Cable Lateral Raises", "Machine Lateral Raises"],
            ),
            ex(
                "push-cable-flyes",
                "Cable Flyes",
                3,
                "12-15",
                "60s",
                &["Dumbbell Flyes", "Pec Deck"],
            ),
            ex(
                "push-tricep-pushdowns",
                "Tricep Pushdowns",
                3,
                "10-12",
                "60s",
                &["Skull Crushers", "Close-Grip Bench"],
            ),
            ex(
                "push-overhead-tricep-extension",
                "Overhead Tricep Extension",
                3,
                "10-12",
                "60s",
                &["Tricep Dips", "Cable Overhead Extension"],
            ),
        ],
    },
    WorkoutPlan {
        id: "pull",
        name: "Pull",
        plan_type: PlanType::Pull,
        exercises: &[
            with_notes(
                ex(
                    "pull-hex-bar-deadlift",
                    "Hex Bar Deadlift",
                    3,
                    "6-8",
                    "120s",
                    &["Rack Pulls", "Chest-Supported Row"],
                ),
                "QL Injury - Be careful",
            ),
            ex(
                "pull-lat-pulldown",
                "Lat Pulldown",
                4,
                "10-12",
                "90s",
                &["Pull-ups", "Straight Arm Pulldown"],
            ),
            ex(
                "pull-seated-cable-row",
                "Seated Cable Row",
                3,
                "10-12",
                "90s",
                &["T-Bar Row", "Meadows Row"],
            ),
            with_notes(
                ex(
                    "pull-chest-supported-row",
                    "Chest-Supported Row",
                    3,
                    "10-12",
                    "60s",
                    &["Incline DB Row", "Machine Row"],
                ),
                "QL-friendly",
            ),
            ex(
                "pull-face-pulls",
                "Face Pulls",
                3,
                "15-20",
                "60s",
                &["Reverse Pec Deck", "Cable Face Pulls"],
            ),
            ex(
                "pull-dumbbell-bicep-curls",
                "Dumbbell Bicep Curls",
                3,
                "10-12",
                "60s",
                &["Barbell Curls", "Cable Curls"],
            ),
            ex(
                "pull-hammer-curls",
                "Hammer Curls",
                3,
                "10-12",
                "60s",
                &["Cross-Body Curls", "Rope Hammer Curls"],
            ),
        ],
    },
    WorkoutPlan {
        id: "legs",
        name: "Legs",
        plan_type: PlanType::Legs,
        exercises: &[
            ex(
                "legs-hack-squat",
                "Hack Squat",
                4,
                "8-10",
                "120s",
                &["Barbell Back Squat", "Goblet Squats"],
            ),
            ex(
                "legs-leg-press",
                "Leg Press",
                4,
                "10-12",
                "120s",
                &["Bulgarian Split Squats", "Front Squat"],
            ),
            ex(
                "legs-lying-leg-curl",
                "Lying Leg Curl",
                4,
                "10-12",
                "60s",
                &["Seated Leg Curl", "Stiff-Leg Deadlift"],
            ),
            ex(
                "legs-leg-extension",
                "Leg Extension",
                3,
                "12-15",
                "60s",
                &["Goblet Squats", "Sissy Squat"],
            ),
            ex(
                "legs-standing-calf-raises",
                "Standing Calf Raises",
                4,
                "15-20",
                "60s",
                &["Seated Calf Raises", "Donkey Calf Raises"],
            ),
        ],
    },
    WorkoutPlan {
        id: "upper-hybrid",
        name: "Upper Hybrid",
        plan_type: PlanType::UpperHybrid,
        exercises: &[
            ex(
                "upper-machine-chest-press",
                "Machine Chest Press",
                3,
                "10-12",
                "90s",
                &["Dumbbell Bench Press", "Push-Ups"],
            ),
            ex(
                "upper-lat-pulldown",
                "Lat Pulldown",
                3,
                "10-12",
                "90s",
                &["Pull-ups", "Straight Arm Pulldown"],
            ),
            ex(
                "upper-seated-dumbbell-press",
                "Seated Dumbbell Press",
                3,
                "10-12",
                "90s",
                &["Arnold Press", "Machine Shoulder Press"],
            ),
            ex(
                "upper-seated-cable-row",
                "Seated Cable Row",
                3,
                "10-12",
                "60s",
                &["One-Arm DB Row", "T-Bar Row"],
            ),
            ex(
                "upper-lateral-raises",
                "Lateral Raises",
                3,
                "12-15",
                "60s",
                &["Upright Rows", "Cable Lateral Raises"],
            ),
            ex(
                "upper-face-pulls",
                "Face Pulls",
                3,
                "15-20",
                "60s",
                &["Reverse Pec Deck", "Band Pull-Aparts"],
            ),
            ex(
                "upper-bicep-curls",
                "Bicep Curls",
                3,
                "10-12",
                "60s",
                &["Hammer Curls", "Preacher Curls"],
            ),
            ex(
                "upper-tricep-pushdowns",
                "Tricep Pushdowns",
                3,
                "10-12",
                "60s",
                &["Skull Crushers", "Tricep Dips"],
            ),
        ],
    },
];
