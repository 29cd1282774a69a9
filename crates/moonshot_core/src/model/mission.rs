//! Mission domain model.
//!
//! # Responsibility
//! - Decode mission records from the wire schema (`launchDate`, `crew`).
//! - Derive display name, badge image key and launch date strings.
//!
//! # Invariants
//! - `crew` keeps roster order from the source document.
//! - A missing launch date renders as [`LAUNCH_DATE_UNAVAILABLE`]; the
//!   sentinel is chosen from `launch_date.is_none()`, never from a string
//!   comparison on formatted output.

use super::ValidationError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel rendered in place of an absent launch date.
pub const LAUNCH_DATE_UNAVAILABLE: &str = "N/A";

const DISPLAY_NAME_PREFIX: &str = "Apollo";
const IMAGE_KEY_PREFIX: &str = "apollo";
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
const SHORT_DATE_FORMAT: &str = "%b %-d, %Y";
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Numeric mission identifier (the Apollo flight number).
pub type MissionId = u32;

/// Unresolved crew reference embedded in a mission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewRole {
    /// Astronaut identifier; must be a key of the astronaut document.
    pub name: String,
    /// Role label, e.g. `Commander`.
    pub role: String,
}

impl CrewRole {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// One mission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    /// Calendar launch date. `None` for missions that never launched.
    #[serde(default, deserialize_with = "deserialize_launch_date")]
    pub launch_date: Option<NaiveDate>,
    /// Crew in roster order.
    pub crew: Vec<CrewRole>,
    /// Mission highlights text.
    pub description: String,
}

impl Mission {
    /// Creates a mission without crew or launch date.
    pub fn new(id: MissionId, description: impl Into<String>) -> Self {
        Self {
            id,
            launch_date: None,
            crew: Vec::new(),
            description: description.into(),
        }
    }

    /// Returns the display name, e.g. `Apollo 11`.
    pub fn display_name(&self) -> String {
        format!("{DISPLAY_NAME_PREFIX} {}", self.id)
    }

    /// Returns the badge image key, e.g. `apollo11`.
    ///
    /// Asset existence is not checked here.
    pub fn image_key(&self) -> String {
        format!("{IMAGE_KEY_PREFIX}{}", self.id)
    }

    pub fn has_launch_date(&self) -> bool {
        self.launch_date.is_some()
    }

    /// Abbreviated launch date (`Jul 16, 1969`) or `N/A`.
    pub fn formatted_launch_date(&self) -> String {
        self.format_launch_date(SHORT_DATE_FORMAT)
    }

    /// Complete launch date (`Wednesday, July 16, 1969`) or `N/A`.
    pub fn detailed_launch_date(&self) -> String {
        self.format_launch_date(LONG_DATE_FORMAT)
    }

    /// Validates record-level invariants that serde cannot express.
    ///
    /// # Errors
    /// - Returns an error when a crew entry has a blank astronaut key or role.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (position, member) in self.crew.iter().enumerate() {
            if member.name.trim().is_empty() {
                return Err(ValidationError::EmptyCrewReference {
                    mission_id: self.id,
                    position,
                });
            }
            if member.role.trim().is_empty() {
                return Err(ValidationError::EmptyCrewRole {
                    mission_id: self.id,
                    astronaut_id: member.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn format_launch_date(&self, pattern: &str) -> String {
        match self.launch_date {
            Some(date) => date.format(pattern).to_string(),
            None => LAUNCH_DATE_UNAVAILABLE.to_string(),
        }
    }
}

/// Parses a wire launch date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its calendar
/// date in the timestamp's own offset.
pub fn parse_launch_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let trimmed = raw.trim();
    match NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => DateTime::parse_from_rfc3339(trimmed).map(|timestamp| timestamp.date_naive()),
    }
}

fn deserialize_launch_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_launch_date(&value).map(Some).map_err(|err| {
            serde::de::Error::custom(format!("invalid launchDate `{value}`: {err}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_launch_date, Mission, LAUNCH_DATE_UNAVAILABLE};
    use chrono::NaiveDate;

    fn apollo(id: u32, launch_date: Option<NaiveDate>) -> Mission {
        let mut mission = Mission::new(id, "test mission");
        mission.launch_date = launch_date;
        mission
    }

    #[test]
    fn display_name_and_image_key_follow_flight_number() {
        let mission = apollo(11, None);
        assert_eq!(mission.display_name(), "Apollo 11");
        assert_eq!(mission.image_key(), "apollo11");
        assert_eq!(apollo(1, None).display_name(), "Apollo 1");
    }

    #[test]
    fn present_launch_date_formats_short_and_long() {
        let mission = apollo(11, NaiveDate::from_ymd_opt(1969, 7, 16));
        assert_eq!(mission.formatted_launch_date(), "Jul 16, 1969");
        assert_eq!(mission.detailed_launch_date(), "Wednesday, July 16, 1969");
    }

    #[test]
    fn absent_launch_date_uses_sentinel() {
        let mission = apollo(1, None);
        assert!(!mission.has_launch_date());
        assert_eq!(mission.formatted_launch_date(), LAUNCH_DATE_UNAVAILABLE);
        assert_eq!(mission.detailed_launch_date(), LAUNCH_DATE_UNAVAILABLE);
    }

    #[test]
    fn parse_launch_date_accepts_rfc3339_timestamps() {
        let date = parse_launch_date("1968-12-21T12:51:00Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1968, 12, 21).unwrap());
    }

    #[test]
    fn parse_launch_date_rejects_garbage() {
        assert!(parse_launch_date("July 1969").is_err());
        assert!(parse_launch_date("1969-13-01").is_err());
    }
}
