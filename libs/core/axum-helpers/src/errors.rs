use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaves the API wrapped in the same envelope, providing
/// consistent information to clients:
/// - `type`: machine-readable error identifier (e.g., "not_found")
/// - `message`: human-readable error message
/// - `details`: optional structured details (e.g., validation field errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "error": {
///     "type": "duplicate_email",
///     "message": "User with email 'asha@example.com' already exists"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Inner payload of [`ErrorResponse`].
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error identifier for programmatic handling
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., per-field validation errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                kind: kind.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.error.details = Some(details);
        self
    }
}
