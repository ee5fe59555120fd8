use axum::http::StatusCode;
use dattebayo_domain::DomainError;

/// Maps a registry or lifecycle error onto an HTTP status and message.
pub fn error_response(error: DomainError) -> (StatusCode, String) {
    let status = match &error {
        DomainError::InvalidName(_)
        | DomainError::UnsupportedTld(_)
        | DomainError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        DomainError::AlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::DomainNotFound(_) | DomainError::SubdomainNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        DomainError::SystemDomainProtected(_) => StatusCode::FORBIDDEN,
        DomainError::BindFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, error.to_string())
}
