//! Health Behavior Change Tracker
//!
//! A guided questionnaire that records self-efficacy, stage of change,
//! exercise habits, barriers and a weekly activity journal for one session,
//! then summarizes them with rule-based recommendations.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod recommendations;
pub mod store;
pub mod summary;
pub mod views;

pub use error::{Result, TrackerError};
pub use models::{ActivityLog, Day, SessionState, Stage};
pub use recommendations::{compute_recommendations, Recommendation};
pub use store::{Field, FieldUpdate, FieldValue, SessionStore, Submission};
