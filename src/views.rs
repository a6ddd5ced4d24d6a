//! Navigation modes and the static text shown on each page.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Home,
    SelfEfficacy,
    StagesOfChange,
    PhysicalActivity,
    Barriers,
    Education,
    ActivityLog,
    Results,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Home,
        View::SelfEfficacy,
        View::StagesOfChange,
        View::PhysicalActivity,
        View::Barriers,
        View::Education,
        View::ActivityLog,
        View::Results,
    ];

    /// Sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::SelfEfficacy => "Self-Efficacy",
            View::StagesOfChange => "Stages of Change",
            View::PhysicalActivity => "Physical Activity",
            View::Barriers => "Barriers to Physical Activity",
            View::Education => "Educational Module",
            View::ActivityLog => "Activity Log",
            View::Results => "Results",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            View::Home => "Welcome to the Health Behavior Change Tracker",
            View::SelfEfficacy => "Self-Efficacy Assessment",
            View::StagesOfChange => "Stages of Change Assessment",
            View::PhysicalActivity => "Physical Activity Assessment (Exercise Vital Sign)",
            View::Barriers => "Identify Barriers to Physical Activity",
            View::Education => "Educational Module: Benefits of Exercise & Behavior Change",
            View::ActivityLog => "Weekly Activity Log",
            View::Results => "Health Behavior Change Results",
        }
    }

    pub fn intro(self) -> &'static str {
        match self {
            View::Home => HOME_INTRO,
            View::SelfEfficacy => {
                "Self-efficacy refers to an individual's belief in their ability to succeed in specific situations or accomplish a task. This assessment will help measure your confidence in making health behavior changes."
            }
            View::StagesOfChange => {
                "According to Prochaska et al. (1992), behavior change occurs in stages. This assessment will help identify your current stage of change for health behaviors."
            }
            View::PhysicalActivity => {
                "The Exercise Vital Sign (EVS) is a set of questions that help assess the frequency and duration of moderate to strenuous exercise you engage in each week."
            }
            View::Barriers => {
                "Understanding barriers can help us address obstacles to engaging in regular physical activity."
            }
            View::Education => "",
            View::ActivityLog => "Log your daily physical activities and experiences here.",
            View::Results => "",
        }
    }

    /// Zero-based position in the sidebar, as selected by the digit keys 1-8.
    pub fn from_index(index: usize) -> Option<View> {
        View::ALL.get(index).copied()
    }
}

pub const APP_TITLE: &str = "Health Behavior Change Tracker";

const HOME_INTRO: &str = "This app helps you measure your health behavior change using theories of self-efficacy (Bandura, 1986) and stages of change (Prochaska et al., 1992). It also assesses your physical activity using the Exercise Vital Sign (EVS). The app will provide personalized recommendations based on your responses.";

pub const CONFIDENCE_PROMPT: &str = "On a scale from 1 to 10, how confident are you in your ability to make a lasting change in your health behaviors?";
pub const STAGE_PROMPT: &str = "Which of the following best describes your current stage of behavior change?";
pub const FREQUENCY_PROMPT: &str = "How many days per week do you engage in moderate or strenuous exercise?";
pub const DURATION_PROMPT: &str = "On average, how many minutes per session do you engage in moderate or strenuous exercise?";
pub const CARDIO_PROMPT: &str = "How many minutes per week do you engage in cardio-respiratory training?";
pub const WEIGHT_PROMPT: &str = "How many minutes per week do you engage in weight-based training?";
pub const BARRIERS_PROMPT: &str = "Please list any personal barriers you feel may prevent you from engaging in physical activity.";

/// A titled block of bullet points on the educational page.
pub struct EducationSection {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

pub const EDUCATION: &[EducationSection] = &[
    EducationSection {
        title: "Benefits of Exercise",
        bullets: &[
            "Improves cardiovascular health, strength, and flexibility",
            "Boosts mood and reduces symptoms of depression and anxiety",
            "Enhances cognitive function and reduces risks of chronic diseases",
        ],
    },
    EducationSection {
        title: "Theories of Health Behavior Change",
        bullets: &[
            "Self-Efficacy (Bandura, 1986): Belief in one's ability to initiate and persist in behaviors that lead to desired outcomes.",
            "Stages of Change (Prochaska, 1992): Understand where you are in the behavior change process, from precontemplation to maintenance.",
        ],
    },
    EducationSection {
        title: "Counseling Services at Bentley University",
        bullets: &[
            "The Counseling Center is available for all students and offers mental health support as part of tuition.",
        ],
    },
    EducationSection {
        title: "Contact Information",
        bullets: &[
            "Phone: 781-891-2274",
            "Location: Callahan Building, 2nd Floor",
            "Hours: Mon-Fri, 9am-12pm & 1pm-4pm (Closed 12-1pm for lunch)",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_follows_sidebar_order() {
        assert_eq!(View::from_index(0), Some(View::Home));
        assert_eq!(View::from_index(7), Some(View::Results));
        assert_eq!(View::from_index(8), None);
    }

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<&str> = View::ALL.iter().map(|v| v.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), View::ALL.len());
    }

    #[test]
    fn test_counseling_contact_details_have_their_own_heading() {
        let contact = EDUCATION
            .iter()
            .find(|section| section.title == "Contact Information")
            .unwrap();
        assert_eq!(contact.bullets.len(), 3);
        assert!(contact.bullets[0].starts_with("Phone:"));

        let counseling = EDUCATION
            .iter()
            .find(|section| section.title.starts_with("Counseling Services"))
            .unwrap();
        assert!(counseling.bullets.iter().all(|b| !b.starts_with("Phone:")));
    }

    #[test]
    fn test_deserialize_snake_case() {
        let view: View = serde_json::from_str("\"physical_activity\"").unwrap();
        assert_eq!(view, View::PhysicalActivity);
        assert!(serde_json::from_str::<View>("\"Physical Activity\"").is_err());
    }
}
