//! Verdict rendering

use serde_json::Value;

use crate::domain::AssignmentRecord;
use crate::error::Result;

/// Renders the chat sentence for a record
pub fn render(record: &AssignmentRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        record.status.verdict()
    )
}

/// Renders the chat sentence for a raw record from the `homeworks` list
pub fn format(value: &Value) -> Result<String> {
    AssignmentRecord::from_value(value).map(|record| render(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HomeworkStatus;
    use crate::error::{Failure, FailureKind};
    use serde_json::json;

    #[test]
    fn test_render_each_status() {
        assert_eq!(
            render(&AssignmentRecord::new("A", HomeworkStatus::Approved)),
            "Изменился статус проверки работы \"A\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            render(&AssignmentRecord::new("A", HomeworkStatus::Reviewing)),
            "Изменился статус проверки работы \"A\". Работа взята на проверку ревьюером."
        );
        assert_eq!(
            render(&AssignmentRecord::new("A", HomeworkStatus::Rejected)),
            "Изменился статус проверки работы \"A\". Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_format_raw_record() {
        let text = format(&json!({ "homework_name": "hw05.zip", "status": "reviewing" })).unwrap();
        assert_eq!(
            text,
            "Изменился статус проверки работы \"hw05.zip\". Работа взята на проверку ревьюером."
        );
    }

    #[test]
    fn test_format_unknown_status() {
        let err = format(&json!({ "homework_name": "A", "status": "in_review" })).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownStatus);
        assert_eq!(err, Failure::UnknownStatus("in_review".to_string()));
    }

    #[test]
    fn test_format_missing_keys() {
        assert_eq!(
            format(&json!({ "status": "approved" })).unwrap_err(),
            Failure::missing("homework_name")
        );
        assert_eq!(
            format(&json!({ "homework_name": "A" })).unwrap_err(),
            Failure::missing("status")
        );
    }
}
