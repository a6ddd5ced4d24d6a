//! Results page content, built from a state snapshot.

use serde::Serialize;

use crate::error::Result;
use crate::models::{Day, SessionState};
use crate::recommendations::{compute_recommendations, Recommendation};

pub const CLOSING_LINE: &str = "Review your data regularly to track progress and adjust your goals!";

#[derive(Clone, Debug)]
pub struct Summary {
    pub self_efficacy: String,
    pub stage: String,
    pub physical_activity: String,
    pub barriers: String,
    pub activity_log: Vec<(Day, String)>,
    pub recommendations: Vec<Recommendation>,
    state: SessionState,
}

#[derive(Serialize)]
struct Export<'a> {
    state: &'a SessionState,
    recommendations: Vec<&'static str>,
}

impl Summary {
    /// Headline lines in display order.
    pub fn lines(&self) -> [&str; 4] {
        [
            self.self_efficacy.as_str(),
            self.stage.as_str(),
            self.physical_activity.as_str(),
            self.barriers.as_str(),
        ]
    }

    pub fn to_json(&self) -> Result<String> {
        let export = Export {
            state: &self.state,
            recommendations: self.recommendations.iter().map(|r| r.message()).collect(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

pub fn summarize(state: &SessionState) -> Summary {
    Summary {
        self_efficacy: format!("Self-Efficacy Score: {}", state.confidence),
        stage: format!("Stage of Change: {}", state.stage),
        physical_activity: format!(
            "Physical Activity: {} days per week, {} minutes per session. Cardio: {} min/week, Weight training: {} min/week.",
            state.exercise_frequency, state.exercise_duration, state.cardio_minutes, state.weight_minutes
        ),
        barriers: format!("Barriers to Physical Activity: {}", state.barriers),
        activity_log: state
            .activity_log
            .iter()
            .map(|(day, text)| (day, text.to_string()))
            .collect(),
        recommendations: compute_recommendations(state),
        state: state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stage;

    #[test]
    fn test_summary_of_defaults() {
        let summary = summarize(&SessionState::default());
        assert_eq!(
            summary.lines(),
            [
                "Self-Efficacy Score: 5",
                "Stage of Change: Precontemplation",
                "Physical Activity: 3 days per week, 30 minutes per session. Cardio: 60 min/week, Weight training: 60 min/week.",
                "Barriers to Physical Activity: ",
            ]
        );
        assert_eq!(summary.activity_log.len(), 7);
        assert_eq!(summary.recommendations, vec![Recommendation::WeeklyMinimum]);
    }

    #[test]
    fn test_summary_reflects_submitted_values() {
        let mut state = SessionState {
            confidence: 9,
            stage: Stage::Preparation,
            barriers: "Knee injury".to_string(),
            ..SessionState::default()
        };
        state.activity_log.set_entry(Day::Wednesday, "Walk 30 min");

        let summary = summarize(&state);
        assert_eq!(summary.self_efficacy, "Self-Efficacy Score: 9");
        assert_eq!(summary.stage, "Stage of Change: Preparation");
        assert_eq!(summary.barriers, "Barriers to Physical Activity: Knee injury");
        assert_eq!(summary.activity_log[2], (Day::Wednesday, "Walk 30 min".to_string()));
    }

    #[test]
    fn test_json_export() {
        let state = SessionState {
            exercise_frequency: 1,
            ..SessionState::default()
        };
        let json = summarize(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["state"]["exercise_frequency"], 1);
        assert_eq!(value["state"]["stage"], "Precontemplation");
        assert_eq!(value["state"]["activity_log"]["Sunday"], "");
        assert_eq!(
            value["recommendations"][0],
            "Aim to exercise 3-5 days per week to meet minimum health guidelines."
        );
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 2);
    }
}
