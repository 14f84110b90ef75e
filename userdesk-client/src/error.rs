use reqwest::StatusCode;
use userdesk_shared::error::ErrorResponse;

/// Errors returned by `UserClient`
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered 404: no user with the requested ID
    #[error("User not found")]
    NotFound,

    /// The server answered with any other non-success status
    ///
    /// `body` is the decoded error body when the server sent one.
    #[error("HTTP {status}: {}", server_message(.body))]
    Api {
        status: StatusCode,
        body: Option<ErrorResponse>,
    },

    /// Connection, TLS, or body decoding failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::NotFound => Some(StatusCode::NOT_FOUND),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
        }
    }

    /// Fields rejected by server-side validation, in reporting order
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            ClientError::Api {
                body: Some(ErrorResponse {
                    details: Some(details),
                    ..
                }),
                ..
            } => details.iter().map(|d| d.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

fn server_message(body: &Option<ErrorResponse>) -> &str {
    body.as_ref()
        .map(|b| b.message.as_str())
        .unwrap_or("no error body")
}

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use userdesk_shared::error::ValidationErrorDetail;

    #[test]
    fn test_display_uses_server_message() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            body: Some(ErrorResponse {
                error: "bad_request".to_string(),
                message: "Validation failed (numeric string is expected)".to_string(),
                details: None,
            }),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 400 Bad Request: Validation failed (numeric string is expected)"
        );

        let err = ClientError::Api {
            status: StatusCode::BAD_GATEWAY,
            body: None,
        };
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: no error body");
    }

    #[test]
    fn test_invalid_fields() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            body: Some(ErrorResponse {
                error: "validation_error".to_string(),
                message: "Request validation failed".to_string(),
                details: Some(vec![
                    ValidationErrorDetail::new("name", "name is required"),
                    ValidationErrorDetail::new("email", "email must be an email"),
                ]),
            }),
        };
        assert_eq!(err.invalid_fields(), vec!["name", "email"]);
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

        assert!(ClientError::NotFound.invalid_fields().is_empty());
        assert_eq!(ClientError::NotFound.status(), Some(StatusCode::NOT_FOUND));
    }
}
