//! Session state store.
//!
//! Holds the latest answers for one interactive session. Every write
//! overwrites its field wholesale; reads of a never-submitted field return
//! the default the store was constructed with.

use log::info;

use crate::models::{ActivityLog, SessionState, Stage};

/// Addressable fields of [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ExerciseFrequency,
    ExerciseDuration,
    CardioMinutes,
    WeightMinutes,
    Confidence,
    Stage,
    Barriers,
    ActivityLog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Integer(u32),
    Stage(Stage),
    Text(String),
    Log(ActivityLog),
}

/// A write to a single field, carrying a value of that field's type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    ExerciseFrequency(u32),
    ExerciseDuration(u32),
    CardioMinutes(u32),
    WeightMinutes(u32),
    Confidence(u32),
    Stage(Stage),
    Barriers(String),
    ActivityLog(ActivityLog),
}

/// One section's form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    SelfEfficacy {
        confidence: u32,
    },
    StageOfChange {
        stage: Stage,
    },
    PhysicalActivity {
        frequency: u32,
        duration: u32,
        cardio_minutes: u32,
        weight_minutes: u32,
    },
    Barriers {
        text: String,
    },
    ActivityLog(ActivityLog),
}

impl Submission {
    pub fn section(&self) -> &'static str {
        match self {
            Submission::SelfEfficacy { .. } => "self-efficacy",
            Submission::StageOfChange { .. } => "stage-of-change",
            Submission::PhysicalActivity { .. } => "physical-activity",
            Submission::Barriers { .. } => "barriers",
            Submission::ActivityLog(_) => "activity-log",
        }
    }

    /// Text shown to the user once the submission has been stored.
    pub fn confirmation(&self) -> String {
        match self {
            Submission::SelfEfficacy { confidence } => format!(
                "Your self-efficacy score is: {}. Higher scores indicate greater confidence in making health changes.",
                confidence
            ),
            Submission::StageOfChange { stage } => {
                format!("Your current stage of change is: {}.", stage)
            }
            Submission::PhysicalActivity {
                frequency,
                duration,
                cardio_minutes,
                weight_minutes,
            } => format!(
                "You engage in exercise {} days per week for an average of {} minutes per session. Cardio: {} minutes/week, Weight training: {} minutes/week.",
                frequency, duration, cardio_minutes, weight_minutes
            ),
            Submission::Barriers { .. } => {
                "Thank you for sharing your barriers to physical activity.".to_string()
            }
            Submission::ActivityLog(_) => "Your weekly activity log has been saved.".to_string(),
        }
    }

    fn into_updates(self) -> Vec<FieldUpdate> {
        match self {
            Submission::SelfEfficacy { confidence } => vec![FieldUpdate::Confidence(confidence)],
            Submission::StageOfChange { stage } => vec![FieldUpdate::Stage(stage)],
            Submission::PhysicalActivity {
                frequency,
                duration,
                cardio_minutes,
                weight_minutes,
            } => vec![
                FieldUpdate::ExerciseFrequency(frequency),
                FieldUpdate::ExerciseDuration(duration),
                FieldUpdate::CardioMinutes(cardio_minutes),
                FieldUpdate::WeightMinutes(weight_minutes),
            ],
            Submission::Barriers { text } => vec![FieldUpdate::Barriers(text)],
            Submission::ActivityLog(log) => vec![FieldUpdate::ActivityLog(log)],
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: SessionState::default(),
        }
    }

    pub fn get_state(&self) -> &SessionState {
        &self.state
    }

    pub fn get(&self, field: Field) -> FieldValue {
        let state = &self.state;
        match field {
            Field::ExerciseFrequency => FieldValue::Integer(state.exercise_frequency),
            Field::ExerciseDuration => FieldValue::Integer(state.exercise_duration),
            Field::CardioMinutes => FieldValue::Integer(state.cardio_minutes),
            Field::WeightMinutes => FieldValue::Integer(state.weight_minutes),
            Field::Confidence => FieldValue::Integer(state.confidence),
            Field::Stage => FieldValue::Stage(state.stage),
            Field::Barriers => FieldValue::Text(state.barriers.clone()),
            Field::ActivityLog => FieldValue::Log(state.activity_log.clone()),
        }
    }

    /// Overwrites one field. Values are stored as given, range checks are the
    /// caller's business.
    pub fn set(&mut self, update: FieldUpdate) {
        let state = &mut self.state;
        match update {
            FieldUpdate::ExerciseFrequency(v) => state.exercise_frequency = v,
            FieldUpdate::ExerciseDuration(v) => state.exercise_duration = v,
            FieldUpdate::CardioMinutes(v) => state.cardio_minutes = v,
            FieldUpdate::WeightMinutes(v) => state.weight_minutes = v,
            FieldUpdate::Confidence(v) => state.confidence = v,
            FieldUpdate::Stage(stage) => state.stage = stage,
            FieldUpdate::Barriers(text) => state.barriers = text,
            FieldUpdate::ActivityLog(log) => state.activity_log = log,
        }
    }

    /// Stores every field of a section's submission and returns the
    /// confirmation text for it.
    pub fn apply_submission(&mut self, submission: Submission) -> String {
        let section = submission.section();
        let confirmation = submission.confirmation();
        for update in submission.into_updates() {
            self.set(update);
        }
        info!("Stored {} submission", section);
        confirmation
    }
}
