use serde::Serialize;

/// Body of every non-2xx response: `{"error": {"message": "..."}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_nests_message() {
        let body = serde_json::to_value(ErrorBody::new("Bookmark does not exist")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": { "message": "Bookmark does not exist" } })
        );
    }
}
