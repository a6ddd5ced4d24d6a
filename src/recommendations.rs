//! Rule-based recommendations derived from the session state.

use std::fmt;

use crate::models::SessionState;

pub const MIN_DAYS_PER_WEEK: u32 = 3;
pub const MIN_SESSION_MINUTES: u32 = 30;
pub const MIN_WEEKLY_MINUTES: u32 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recommendation {
    ExerciseFrequency,
    SessionDuration,
    WeeklyMinimum,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::ExerciseFrequency => {
                "Aim to exercise 3-5 days per week to meet minimum health guidelines."
            }
            Recommendation::SessionDuration => {
                "Consider increasing sessions to at least 30 minutes for optimal benefits."
            }
            Recommendation::WeeklyMinimum => {
                "WHO recommends at least 150 minutes of moderate-intensity or 75 minutes of vigorous-intensity cardio per week."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Every rule is checked on its own; all that apply are returned, always in
/// frequency, duration, weekly-minimum order.
pub fn compute_recommendations(state: &SessionState) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if state.exercise_frequency < MIN_DAYS_PER_WEEK {
        recommendations.push(Recommendation::ExerciseFrequency);
    }
    if state.exercise_duration < MIN_SESSION_MINUTES {
        recommendations.push(Recommendation::SessionDuration);
    }
    if state.cardio_minutes.saturating_add(state.weight_minutes) < MIN_WEEKLY_MINUTES {
        recommendations.push(Recommendation::WeeklyMinimum);
    }
    recommendations
}
