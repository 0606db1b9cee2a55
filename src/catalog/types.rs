//! Class record types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ClassId = u64;

/// How a class is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassType {
    #[default]
    OnDemand,
    Live,
}

impl ClassType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClassType::OnDemand => "on-demand",
            ClassType::Live => "live",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClassType::OnDemand => "On Demand",
            ClassType::Live => "Live",
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on-demand" | "ondemand" | "on demand" => Ok(ClassType::OnDemand),
            "live" => Ok(ClassType::Live),
            other => Err(format!("unknown class type '{other}' (expected on-demand or live)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    pub id: ClassId,
    pub title: String,
    pub instructor: String,
    pub description: String,
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Empty when no image was picked
    pub featured_image: String,
    pub class_type: ClassType,
    pub created_at: DateTime<Utc>,
}

impl ClassRecord {
    /// One-line card text used by the list view
    #[must_use]
    pub fn card_line(&self) -> String {
        format!(
            "#{} {} with {} ({} min, {})",
            self.id,
            self.title,
            self.instructor,
            self.duration_minutes,
            self.class_type.label()
        )
    }

    /// Multi-line preview of every card field
    #[must_use]
    pub fn summary(&self) -> String {
        let image = if self.featured_image.is_empty() {
            "(none)"
        } else {
            self.featured_image.as_str()
        };
        format!(
            "{title}\n  Instructor:  {instructor}\n  Description: {description}\n  Duration:    {duration} min\n  Type:        {kind}\n  Image:       {image}",
            title = self.title,
            instructor = self.instructor,
            description = self.description,
            duration = self.duration_minutes,
            kind = self.class_type.label(),
        )
    }
}
