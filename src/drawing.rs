use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Drawing {
    pub id: DrawingId,
    pub title: String,
    pub status: DrawingStatus,
    pub shape_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct DrawingId(pub Uuid);

impl fmt::Display for DrawingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DrawingId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for DrawingId {
    type Err = uuid::Error;

    fn from_str(uuid: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(uuid)?))
    }
}

macro_attr! {
    #[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, EnumFromStr!, EnumDisplay!)]
    pub enum DrawingStatus {
        Draft,
        Published,
        Archived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_drawing_id() {
        assert_eq!(
            "6787a97f-432e-43fb-8b67-b4f5b4142427"
                .parse::<DrawingId>()
                .unwrap(),
            DrawingId(Uuid::parse_str("6787a97f-432e-43fb-8b67-b4f5b4142427").unwrap())
        );
    }

    #[rstest]
    fn test_parse_invalid_drawing_id() {
        assert!("not-a-uuid".parse::<DrawingId>().is_err());
    }

    #[rstest]
    fn test_parse_drawing_status() {
        assert_eq!(
            "Published".parse::<DrawingStatus>().unwrap(),
            DrawingStatus::Published
        );
        assert_eq!(DrawingStatus::Draft.to_string(), "Draft".to_string());
    }
}
