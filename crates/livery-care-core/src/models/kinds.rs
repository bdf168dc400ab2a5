//! Enumerations describing tasks and care plan status.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of activity a task prescribes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    Exercise,
    Walking,
    Lunging,
    Ridden,
    Therapy,
    Medication,
    Observation,
    Other,
}

impl TaskType {
    pub const ALL: [TaskType; 8] = [
        TaskType::Exercise,
        TaskType::Walking,
        TaskType::Lunging,
        TaskType::Ridden,
        TaskType::Therapy,
        TaskType::Medication,
        TaskType::Observation,
        TaskType::Other,
    ];

    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Exercise => "exercise",
            TaskType::Walking => "walking",
            TaskType::Lunging => "lunging",
            TaskType::Ridden => "ridden",
            TaskType::Therapy => "therapy",
            TaskType::Medication => "medication",
            TaskType::Observation => "observation",
            TaskType::Other => "other",
        }
    }

    /// Human readable label used by the form renderer.
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::Exercise => "Exercise",
            TaskType::Walking => "Walking",
            TaskType::Lunging => "Lunging",
            TaskType::Ridden => "Ridden Work",
            TaskType::Therapy => "Therapy",
            TaskType::Medication => "Medication",
            TaskType::Observation => "Observation",
            TaskType::Other => "Other",
        }
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid task type: {s}"))
    }
}

/// How often a task is carried out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Daily,
    TwiceDaily,
    EveryOtherDay,
    Weekly,
    AsNeeded,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::TwiceDaily,
        Frequency::EveryOtherDay,
        Frequency::Weekly,
        Frequency::AsNeeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::TwiceDaily => "twice_daily",
            Frequency::EveryOtherDay => "every_other_day",
            Frequency::Weekly => "weekly",
            Frequency::AsNeeded => "as_needed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::TwiceDaily => "Twice Daily",
            Frequency::EveryOtherDay => "Every Other Day",
            Frequency::Weekly => "Weekly",
            Frequency::AsNeeded => "As Needed",
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace('-', "_");
        Frequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == normalized)
            .ok_or_else(|| format!("Invalid frequency: {s}"))
    }
}

/// Feed round a feed-based medication is given with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FeedTime {
    #[default]
    Morning,
    Evening,
    Both,
}

impl FeedTime {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedTime::Morning => "morning",
            FeedTime::Evening => "evening",
            FeedTime::Both => "both",
        }
    }
}

impl FromStr for FeedTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(FeedTime::Morning),
            "evening" => Ok(FeedTime::Evening),
            "both" => Ok(FeedTime::Both),
            _ => Err(format!("Invalid feed time: {s}")),
        }
    }
}

/// Whether a task is tied to feed rounds.
///
/// Editor state keeps the raw flag and the last selected feed time so that
/// toggling the flag back on restores the previous choice. This union is
/// derived from that state only when a payload is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feeding {
    NotFeedBased,
    WithFeed(FeedTime),
}

impl Feeding {
    pub fn from_parts(is_feed_based: bool, feed_time: FeedTime) -> Self {
        if is_feed_based {
            Feeding::WithFeed(feed_time)
        } else {
            Feeding::NotFeedBased
        }
    }

    pub fn is_feed_based(&self) -> bool {
        matches!(self, Feeding::WithFeed(_))
    }

    pub fn feed_time(&self) -> Option<FeedTime> {
        match self {
            Feeding::WithFeed(time) => Some(*time),
            Feeding::NotFeedBased => None,
        }
    }
}

/// Lifecycle status of a stored care plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Plan is in effect
    #[default]
    Active,

    /// Plan ran its course
    Completed,

    /// Plan was stopped before completion
    Cancelled,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PlanStatus::Active),
            "completed" => Ok(PlanStatus::Completed),
            "cancelled" => Ok(PlanStatus::Cancelled),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Completed => "completed",
            PlanStatus::Cancelled => "cancelled",
        }
    }
}
