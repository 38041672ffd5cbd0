//! Assignment domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::{HOMEWORK_NAME_FIELD, STATUS_FIELD};
use crate::error::{Failure, Result};

/// Review status of a submitted assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Wire value of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Verdict sentence shown to the user
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = Failure;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(Failure::UnknownStatus(other.to_string())),
        }
    }
}

/// A single assignment as reported by the status service
///
/// Two records are the same notification when both name and status match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl AssignmentRecord {
    pub fn new(name: impl Into<String>, status: HomeworkStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Extracts a record from one raw element of the `homeworks` list
    ///
    /// The service sends more keys than these two; extra keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self> {
        let name = value
            .get(HOMEWORK_NAME_FIELD)
            .ok_or(Failure::missing(HOMEWORK_NAME_FIELD))?
            .as_str()
            .ok_or(Failure::wrong_type(HOMEWORK_NAME_FIELD, "строки"))?;

        let status = match value.get(STATUS_FIELD).ok_or(Failure::missing(STATUS_FIELD))? {
            Value::String(s) => s.parse()?,
            other => return Err(Failure::UnknownStatus(other.to_string())),
        };

        Ok(Self::new(name, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use serde_json::json;

    #[test]
    fn test_from_value_ignores_extra_keys() {
        let value = json!({
            "id": 124,
            "homework_name": "username__hw_python_oop.zip",
            "status": "rejected",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект"
        });

        let record = AssignmentRecord::from_value(&value).unwrap();
        assert_eq!(record.name, "username__hw_python_oop.zip");
        assert_eq!(record.status, HomeworkStatus::Rejected);
    }

    #[test]
    fn test_from_value_missing_keys() {
        let err = AssignmentRecord::from_value(&json!({ "status": "approved" })).unwrap_err();
        assert_eq!(err, Failure::missing("homework_name"));

        let err = AssignmentRecord::from_value(&json!({ "homework_name": "A" })).unwrap_err();
        assert_eq!(err, Failure::missing("status"));
    }

    #[test]
    fn test_from_value_unknown_status() {
        let err =
            AssignmentRecord::from_value(&json!({ "homework_name": "A", "status": "in_review" }))
                .unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownStatus);

        let err = AssignmentRecord::from_value(&json!({ "homework_name": "A", "status": null }))
            .unwrap_err();
        assert_eq!(err, Failure::UnknownStatus("null".to_string()));
    }

    #[test]
    fn test_from_value_name_must_be_string() {
        let err = AssignmentRecord::from_value(&json!({ "homework_name": 7, "status": "approved" }))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::WrongType);
    }

    #[test]
    fn test_status_serde_matches_wire_values() {
        let status: HomeworkStatus = serde_json::from_value(json!("reviewing")).unwrap();
        assert_eq!(status, HomeworkStatus::Reviewing);
        assert_eq!(serde_json::to_value(HomeworkStatus::Approved).unwrap(), json!("approved"));
    }

    #[test]
    fn test_record_equality_covers_status() {
        let reviewing = AssignmentRecord::new("A", HomeworkStatus::Reviewing);
        let approved = AssignmentRecord::new("A", HomeworkStatus::Approved);
        assert_ne!(reviewing, approved);
        assert_eq!(reviewing, AssignmentRecord::new("A", HomeworkStatus::Reviewing));
    }
}
