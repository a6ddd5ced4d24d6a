use health_tracker::summary::{summarize, CLOSING_LINE};
use health_tracker::{
    compute_recommendations, ActivityLog, Day, Field, FieldValue, Recommendation, SessionState,
    SessionStore, Stage, Submission,
};

#[test]
fn test_fresh_session_reads_defaults() {
    let store = SessionStore::new();
    assert_eq!(store.get_state(), &SessionState::default());
    assert_eq!(store.get(Field::ExerciseFrequency), FieldValue::Integer(3));
    assert_eq!(store.get(Field::Stage), FieldValue::Stage(Stage::Precontemplation));
}

#[test]
fn test_low_activity_session_gets_every_recommendation() {
    let mut store = SessionStore::new();
    store.apply_submission(Submission::PhysicalActivity {
        frequency: 2,
        duration: 20,
        cardio_minutes: 50,
        weight_minutes: 50,
    });

    let recs = compute_recommendations(store.get_state());
    assert_eq!(
        recs,
        vec![
            Recommendation::ExerciseFrequency,
            Recommendation::SessionDuration,
            Recommendation::WeeklyMinimum,
        ]
    );
}

#[test]
fn test_active_session_gets_no_recommendations() {
    let mut store = SessionStore::new();
    store.apply_submission(Submission::PhysicalActivity {
        frequency: 5,
        duration: 45,
        cardio_minutes: 100,
        weight_minutes: 60,
    });
    assert!(compute_recommendations(store.get_state()).is_empty());
}

#[test]
fn test_full_questionnaire_summary() {
    let mut store = SessionStore::new();
    store.apply_submission(Submission::SelfEfficacy { confidence: 8 });
    store.apply_submission(Submission::StageOfChange {
        stage: Stage::Contemplation,
    });
    store.apply_submission(Submission::Barriers {
        text: "Long commute".to_string(),
    });
    let log: ActivityLog = [(Day::Monday, "Gym, 45 minutes")].into_iter().collect();
    store.apply_submission(Submission::ActivityLog(log));

    let summary = summarize(store.get_state());
    assert_eq!(summary.self_efficacy, "Self-Efficacy Score: 8");
    assert_eq!(summary.stage, "Stage of Change: Contemplation");
    assert_eq!(summary.barriers, "Barriers to Physical Activity: Long commute");

    // physical activity never submitted, so the defaults drive the rules
    assert_eq!(summary.recommendations, vec![Recommendation::WeeklyMinimum]);

    assert_eq!(summary.activity_log.len(), 7);
    assert_eq!(summary.activity_log[0], (Day::Monday, "Gym, 45 minutes".to_string()));
    assert_eq!(
        summary.activity_log.iter().filter(|(_, entry)| entry.is_empty()).count(),
        6
    );
    assert!(CLOSING_LINE.starts_with("Review your data regularly"));
}

#[test]
fn test_recomputing_is_stable() {
    let mut store = SessionStore::new();
    store.apply_submission(Submission::PhysicalActivity {
        frequency: 1,
        duration: 60,
        cardio_minutes: 200,
        weight_minutes: 0,
    });
    let first = compute_recommendations(store.get_state());
    let second = compute_recommendations(store.get_state());
    assert_eq!(first, second);
    assert_eq!(first, vec![Recommendation::ExerciseFrequency]);
}
