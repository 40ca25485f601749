//! Service error taxonomy and the API error payload.
//!
//! Errors carry an internal diagnostic message for logs plus a stable
//! client-facing code and public message. The internal message is never
//! serialised: adapters log it and respond with the fixed wording for the
//! error's kind.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::ports::{
    ContentQueryError, HelpdeskSourceError, MirrorSyncError, RefreshGateError, ResponseCacheError,
};
use crate::middleware::trace::TraceId;


/// Failure category describing where an error originated and how it is
/// surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Argument validation failure: unknown sort key, unknown country,
    /// malformed id, bad pagination.
    InvalidAttribute,
    /// Missing or invalid credentials on a protected endpoint.
    Unauthorised,
    /// The requested entity, or its translation in a context requiring one,
    /// does not exist.
    NotFound,
    /// The remote help-centre API returned a server error or was unreachable.
    UpstreamFailure,
    /// A database read or transaction failed.
    StoreFailure,
    /// A counter, lock, or response-cache operation failed.
    CacheFailure,
    /// Catch-all for unexpected failures.
    Internal,
}

impl ErrorKind {
    /// Stable numeric code carried in the response body.
    pub fn wire_code(self) -> u16 {
        match self {
            Self::InvalidAttribute => 1002,
            Self::NotFound => 1003,
            Self::Unauthorised => 1005,
            Self::UpstreamFailure | Self::StoreFailure | Self::CacheFailure | Self::Internal => {
                1001
            }
        }
    }

    /// HTTP status the kind maps onto.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidAttribute => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorised => StatusCode::UNAUTHORIZED,
            Self::UpstreamFailure | Self::StoreFailure | Self::CacheFailure | Self::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fixed client-facing message for the kind.
    pub fn public_message(self) -> &'static str {
        match self {
            Self::InvalidAttribute => "You passed an invalid value for the attributes.",
            Self::NotFound => "Record Not Found",
            Self::Unauthorised => "Unauthorized",
            Self::UpstreamFailure | Self::StoreFailure | Self::CacheFailure | Self::Internal => {
                "Internal Server Error"
            }
        }
    }

    /// Whether the kind describes a client mistake rather than a server
    /// fault. Client kinds keep their structured details in the response.
    fn is_client_fault(self) -> bool {
        matches!(
            self,
            Self::InvalidAttribute | Self::NotFound | Self::Unauthorised
        )
    }
}

/// Service error.
///
/// # Examples
/// ```
/// use zephyr_backend::domain::{Error, ErrorKind};
///
/// let err = Error::not_found("no such section");
/// assert_eq!(err.kind, ErrorKind::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    /// Failure category.
    pub kind: ErrorKind,
    /// Internal diagnostic message. Logged, never serialised to clients.
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    pub trace_id: Option<String>,
    /// Supplementary structured details, serialised only for client-fault
    /// kinds.
    pub details: Option<Value>,
}

/// Wire payload for error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable numeric code: 1001 internal, 1002 invalid attribute, 1003 not
    /// found, 1005 unauthorised.
    pub code: u16,
    /// Fixed public message for the error's kind.
    pub error: String,
    /// Correlation identifier, when a request scope was active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Structured details for client-fault errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// payload is correlated automatically.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use zephyr_backend::domain::Error;
    ///
    /// let err = Error::invalid_attribute("bad page").with_details(json!({ "field": "page" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorKind::InvalidAttribute`].
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAttribute, message)
    }

    /// Convenience constructor for [`ErrorKind::Unauthorised`].
    pub fn unauthorised(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorised, message)
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Convenience constructor for [`ErrorKind::UpstreamFailure`].
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamFailure, message)
    }

    /// Convenience constructor for [`ErrorKind::StoreFailure`].
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreFailure, message)
    }

    /// Convenience constructor for [`ErrorKind::CacheFailure`].
    pub fn cache_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CacheFailure, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Build the wire payload for this error.
    ///
    /// Internal diagnostics stay out of the payload; only client-fault kinds
    /// keep their structured details.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.kind.wire_code(),
            error: self.kind.public_message().to_owned(),
            trace_id: self.trace_id.clone(),
            details: if self.kind.is_client_fault() {
                self.details.clone()
            } else {
                None
            },
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to API error");
        Error::internal(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind.is_client_fault() {
            warn!(
                kind = ?self.kind,
                message = %self.message,
                trace_id = ?self.trace_id,
                "request rejected"
            );
        } else {
            error!(
                kind = ?self.kind,
                message = %self.message,
                trace_id = ?self.trace_id,
                "request failed"
            );
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header(("trace-id", id.clone()));
        }
        builder.json(self.body())
    }
}

// ---------------------------------------------------------------------------
// Port error promotion
// ---------------------------------------------------------------------------

impl From<ContentQueryError> for Error {
    fn from(err: ContentQueryError) -> Self {
        let message = err.to_string();
        match err {
            ContentQueryError::NotFound { .. } => Self::not_found(message),
            _ => Self::store_failure(message),
        }
    }
}

impl From<MirrorSyncError> for Error {
    fn from(err: MirrorSyncError) -> Self {
        Self::store_failure(err.to_string())
    }
}

impl From<RefreshGateError> for Error {
    fn from(err: RefreshGateError) -> Self {
        Self::cache_failure(err.to_string())
    }
}

impl From<ResponseCacheError> for Error {
    fn from(err: ResponseCacheError) -> Self {
        Self::cache_failure(err.to_string())
    }
}

impl From<HelpdeskSourceError> for Error {
    fn from(err: HelpdeskSourceError) -> Self {
        Self::upstream_failure(err.to_string())
    }
}
