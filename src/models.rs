//models.rs
use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, Local, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const FREQUENCY_RANGE: RangeInclusive<u32> = 0..=7;
pub const DURATION_RANGE: RangeInclusive<u32> = 0..=120;
pub const WEEKLY_MINUTES_RANGE: RangeInclusive<u32> = 0..=300;
pub const CONFIDENCE_RANGE: RangeInclusive<u32> = 1..=10;

/// Readiness phase from the stages-of-change model (Prochaska et al., 1992).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Stage {
    #[default]
    Precontemplation,
    Contemplation,
    Preparation,
    Action,
    Maintenance,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Precontemplation,
        Stage::Contemplation,
        Stage::Preparation,
        Stage::Action,
        Stage::Maintenance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Precontemplation => "Precontemplation",
            Stage::Contemplation => "Contemplation",
            Stage::Preparation => "Preparation",
            Stage::Action => "Action",
            Stage::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn today() -> Day {
        Day::from(Local::now().weekday())
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One free-text journal entry per weekday. Every day is always present,
/// an unsubmitted day is just an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: [String; 7],
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, day: Day) -> &str {
        &self.entries[day.index()]
    }

    pub fn entry_mut(&mut self, day: Day) -> &mut String {
        &mut self.entries[day.index()]
    }

    pub fn set_entry(&mut self, day: Day, text: impl Into<String>) {
        self.entries[day.index()] = text.into();
    }

    /// Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &str)> + '_ {
        Day::ALL.iter().map(move |&day| (day, self.entry(day)))
    }

    /// True when no day has an entry yet.
    pub fn is_blank(&self) -> bool {
        self.entries.iter().all(String::is_empty)
    }
}

impl<S: Into<String>> FromIterator<(Day, S)> for ActivityLog {
    fn from_iter<I: IntoIterator<Item = (Day, S)>>(iter: I) -> Self {
        let mut log = ActivityLog::new();
        for (day, text) in iter {
            log.set_entry(day, text);
        }
        log
    }
}

impl Serialize for ActivityLog {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(Day::ALL.len()))?;
        for (day, text) in self.iter() {
            map.serialize_entry(day.name(), text)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub exercise_frequency: u32,
    pub exercise_duration: u32,
    pub cardio_minutes: u32,
    pub weight_minutes: u32,
    pub confidence: u32,
    pub stage: Stage,
    pub barriers: String,
    pub activity_log: ActivityLog,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            exercise_frequency: 3,
            exercise_duration: 30,
            cardio_minutes: 60,
            weight_minutes: 60,
            confidence: 5,
            stage: Stage::Precontemplation,
            barriers: String::new(),
            activity_log: ActivityLog::new(),
        }
    }
}
