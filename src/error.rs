//! Error taxonomy shared by the solver and the operation facade.
//!
//! Every failure is a caller-input problem: nothing here is transient, so
//! there is no retry classification. Callers that need to branch on the
//! failure use [`BoxAssistError::kind`]; hosts that show the message to an
//! end user use [`BoxAssistError::localized`].

use thiserror::Error;

/// Result type alias for solver and facade operations.
pub type Result<T> = std::result::Result<T, BoxAssistError>;

/// Errors surfaced by [`crate::facade::BoxAssist`] and the subset-sum solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxAssistError {
    /// Argument shape or type does not match the method's contract.
    #[error("unsupported argument types for method '{method}'")]
    UnsupportedArgumentType { method: &'static str },

    /// Structurally inconsistent inputs, rejected before the DP loop.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The table or a single column for this call would exceed its ceiling.
    #[error("{requested} cells requested, limit is {limit}")]
    ResourceLimitExceeded { requested: u128, limit: usize },

    /// No method is registered under this name.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

/// Coarse classification of [`BoxAssistError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnsupportedArgumentType,
    InvalidArgument,
    ResourceLimitExceeded,
    UnknownMethod,
}

impl BoxAssistError {
    /// Shorthand for [`BoxAssistError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        BoxAssistError::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BoxAssistError::UnsupportedArgumentType { .. } => ErrorKind::UnsupportedArgumentType,
            BoxAssistError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BoxAssistError::ResourceLimitExceeded { .. } => ErrorKind::ResourceLimitExceeded,
            BoxAssistError::UnknownMethod(_) => ErrorKind::UnknownMethod,
        }
    }

    /// Message in the host application's language (Russian).
    pub fn localized(&self) -> String {
        match self {
            BoxAssistError::UnsupportedArgumentType { .. } => {
                "Неподдерживаемые типы данных в параметрах".to_string()
            }
            BoxAssistError::InvalidArgument(detail) => {
                format!("Некорректное значение параметра: {detail}")
            }
            BoxAssistError::ResourceLimitExceeded { requested, limit } => format!(
                "Превышен лимит размера таблицы: требуется {requested} ячеек, допустимо {limit}"
            ),
            BoxAssistError::UnknownMethod(name) => format!("Неизвестный метод: {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        let cases = [
            (
                BoxAssistError::UnsupportedArgumentType { method: "Calculate" },
                ErrorKind::UnsupportedArgumentType,
            ),
            (BoxAssistError::invalid("n"), ErrorKind::InvalidArgument),
            (
                BoxAssistError::ResourceLimitExceeded {
                    requested: 10,
                    limit: 5,
                },
                ErrorKind::ResourceLimitExceeded,
            ),
            (
                BoxAssistError::UnknownMethod("Foo".into()),
                ErrorKind::UnknownMethod,
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn display_and_localized_messages() {
        let err = BoxAssistError::UnsupportedArgumentType { method: "Test" };
        assert_eq!(err.to_string(), "unsupported argument types for method 'Test'");
        assert_eq!(err.localized(), "Неподдерживаемые типы данных в параметрах");

        let err = BoxAssistError::ResourceLimitExceeded {
            requested: 42,
            limit: 7,
        };
        assert_eq!(err.to_string(), "42 cells requested, limit is 7");
        assert!(err.localized().contains("42"));
    }
}
