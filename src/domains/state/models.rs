//! Records held by the state store.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Number;

/// Well-known task statuses.
///
/// The status field is an open enumeration: clients may send any string and
/// it is stored as-is.
pub mod task_status {
    pub const PENDING: &str = "Pending";
    pub const IN_PROGRESS: &str = "In Progress";
    pub const COMPLETED: &str = "Completed";
}

/// A user of the application. Users are created at startup and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// A task assigned to a user.
///
/// `assigned_to` is a user id and is not checked against the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: String,
    pub assigned_to: u64,
}

/// Fields supplied by a caller when creating a task. The id is assigned by
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub status: String,
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub assigned_to: u64,
}

/// Interpret a JSON number as a record id.
///
/// Clients may send `2` or `2.0`; both mean id 2. Negative and fractional
/// values are not ids.
pub fn whole_number(number: &Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    })
}

fn deserialize_whole_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    whole_number(&number).ok_or_else(|| {
        de::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            number
        ))
    })
}

impl NewTask {
    pub(crate) fn into_task(self, id: u64) -> Task {
        Task {
            id,
            title: self.title,
            status: self.status,
            assigned_to: self.assigned_to,
        }
    }
}
