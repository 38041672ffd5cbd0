//! Error taxonomy shared by every component
//!
//! Each component reports failures through the same tagged type so the poll
//! loop can contain, log, and de-duplicate them in one place. The `Display`
//! text is the diagnostic that may be forwarded to the chat, so it must never
//! carry a credential.

use thiserror::Error;

/// Result type alias for bot operations
pub type Result<T> = std::result::Result<T, Failure>;

/// A classified failure raised by one stage of a poll cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// Transport-level fault (refused connection, timeout, DNS, TLS)
    #[error("Ошибка соединения с API: {0}")]
    ConnectionFailure(String),

    /// The status endpoint answered with something other than 200
    #[error("Эндпоинт API вернул код {status} вместо 200")]
    UnexpectedStatusCode {
        /// HTTP status code
        status: u16,
        /// Response body, kept for logs only
        body: String,
    },

    /// The response body is not valid JSON
    #[error("Ошибка формата данных: {0}")]
    MalformedPayload(String),

    /// The top-level payload is not a JSON object
    #[error("Ответ API пришёл не в виде словаря")]
    NotAnObject,

    /// A required key is absent
    #[error("Ключа {field} нет в ответе API")]
    MissingField {
        /// Wire name of the missing key
        field: &'static str,
    },

    /// A key is present but holds the wrong JSON type
    #[error("Ключ {field} пришёл не в виде {expected}")]
    WrongType {
        /// Wire name of the offending key
        field: &'static str,
        /// Expected type, as it reads in the message
        expected: &'static str,
    },

    /// A record carries a status outside the verdict table
    #[error("Неизвестный статус проверки работы: {0}")]
    UnknownStatus(String),

    /// The chat API did not accept the message
    #[error("Ошибка отправки сообщения: {0}")]
    DeliveryFailure(String),
}

/// Fieldless tag of a [`Failure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    ConnectionFailure,
    UnexpectedStatusCode,
    MalformedPayload,
    NotAnObject,
    MissingField,
    WrongType,
    UnknownStatus,
    DeliveryFailure,
}

impl Failure {
    /// Returns the tag of this failure
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ConnectionFailure(_) => FailureKind::ConnectionFailure,
            Self::UnexpectedStatusCode { .. } => FailureKind::UnexpectedStatusCode,
            Self::MalformedPayload(_) => FailureKind::MalformedPayload,
            Self::NotAnObject => FailureKind::NotAnObject,
            Self::MissingField { .. } => FailureKind::MissingField,
            Self::WrongType { .. } => FailureKind::WrongType,
            Self::UnknownStatus(_) => FailureKind::UnknownStatus,
            Self::DeliveryFailure(_) => FailureKind::DeliveryFailure,
        }
    }

    /// Create a missing-field failure
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create a wrong-type failure
    pub fn wrong_type(field: &'static str, expected: &'static str) -> Self {
        Self::WrongType { field, expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            Failure::ConnectionFailure("refused".to_string()).kind(),
            FailureKind::ConnectionFailure
        );
        assert_eq!(Failure::missing("homeworks").kind(), FailureKind::MissingField);
        assert_eq!(
            Failure::wrong_type("homeworks", "списка").kind(),
            FailureKind::WrongType
        );
    }

    #[test]
    fn test_status_code_message_ignores_body() {
        let first = Failure::UnexpectedStatusCode {
            status: 503,
            body: "busy at 12:00".to_string(),
        };
        let second = Failure::UnexpectedStatusCode {
            status: 503,
            body: "busy at 12:10".to_string(),
        };
        assert_eq!(first.to_string(), second.to_string());
        assert!(first.to_string().contains("503"));
    }

    #[test]
    fn test_missing_field_names_the_key() {
        assert_eq!(
            Failure::missing("current_date").to_string(),
            "Ключа current_date нет в ответе API"
        );
    }
}
