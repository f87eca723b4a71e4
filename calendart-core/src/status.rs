use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A user's response to an event invitation.
///
/// Any status can move to any other; `Tentative` is the state of a fresh
/// invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Declined,
    #[default]
    Tentative,
    Accepted,
}

impl Status {
    /// Every status, in ascending code order.
    pub const ALL: [Status; 3] = [Status::Declined, Status::Tentative, Status::Accepted];

    /// Numeric code used by adapters that store statuses as integers.
    pub fn code(self) -> i64 {
        match self {
            Status::Declined => -1,
            Status::Tentative => 0,
            Status::Accepted => 1,
        }
    }

    pub fn from_code(code: i64) -> CoreResult<Self> {
        match code {
            -1 => Ok(Status::Declined),
            0 => Ok(Status::Tentative),
            1 => Ok(Status::Accepted),
            value => Err(CoreError::InvalidStatus {
                value,
                expected: Self::expected_codes(),
            }),
        }
    }

    /// iCalendar PARTSTAT value
    pub fn as_ics_str(self) -> &'static str {
        match self {
            Status::Declined => "DECLINED",
            Status::Tentative => "TENTATIVE",
            Status::Accepted => "ACCEPTED",
        }
    }

    pub fn from_ics_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DECLINED" => Some(Status::Declined),
            "TENTATIVE" => Some(Status::Tentative),
            "ACCEPTED" => Some(Status::Accepted),
            _ => None,
        }
    }

    fn expected_codes() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("\"{}\"", s.code()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TryFrom<i64> for Status {
    type Error = CoreError;

    fn try_from(code: i64) -> CoreResult<Self> {
        Status::from_code(code)
    }
}

impl From<Status> for i64 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Declined => write!(f, "declined"),
            Status::Tentative => write!(f, "tentative"),
            Status::Accepted => write!(f, "accepted"),
        }
    }
}
