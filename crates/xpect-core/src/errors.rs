use crate::value::Rejection;
use thiserror::Error;
use xpect_core_types::ValueKind;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by a check maps to exactly one kind. Each kind has a
/// stable error code usable for programmatic handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Assertion
    /// A matcher's predicate did not hold
    AssertionFailed,

    // Dispatch
    /// The check name is absent from the active registry
    UnknownCheck,
    /// The check exists but does not accept the bound value's kind
    UnsupportedValue,
    /// Wrong number of caller-supplied arguments
    ArityMismatch,
    /// An argument has a kind the matcher cannot work with
    InvalidArgument,
    /// A check settled asynchronously but was driven through a synchronous call
    Unsettled,

    // Collaborator
    /// A deferred value rejected; carries the original rejection unchanged
    Rejected,

    // Configuration
    InvalidConfig,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AssertionFailed => "ERR_ASSERTION_FAILED",
            ExErrorKind::UnknownCheck => "ERR_UNKNOWN_CHECK",
            ExErrorKind::UnsupportedValue => "ERR_UNSUPPORTED_VALUE",
            ExErrorKind::ArityMismatch => "ERR_ARITY_MISMATCH",
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::Unsettled => "ERR_UNSETTLED",
            ExErrorKind::Rejected => "ERR_REJECTED",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
        }
    }

    /// Whether this kind is raised by dispatch rather than by a matcher body
    pub fn is_dispatch(&self) -> bool {
        matches!(
            self,
            ExErrorKind::UnknownCheck
                | ExErrorKind::UnsupportedValue
                | ExErrorKind::ArityMismatch
                | ExErrorKind::InvalidArgument
                | ExErrorKind::Unsettled
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the check name, the kind of the bound
/// value, the human-readable message and, for equality-style failures, the
/// rendered diff on its own.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    check: Option<String>,
    value_kind: Option<ValueKind>,
    message: String,
    diff: Option<String>,
    rejection: Option<Rejection>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            check: None,
            value_kind: None,
            message: String::new(),
            diff: None,
            rejection: None,
        }
    }

    /// Assertion failure with the given message
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::new(ExErrorKind::AssertionFailed).with_message(message)
    }

    /// Wrap a deferred value's rejection without altering it
    ///
    /// The returned error displays exactly the rejection's message, and
    /// [`ExError::rejection`] hands back the same allocation.
    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            message: rejection.to_string(),
            rejection: Some(rejection),
            ..Self::new(ExErrorKind::Rejected)
        }
    }

    /// Add check context
    pub fn with_check(mut self, check: impl Into<String>) -> Self {
        self.check = Some(check.into());
        self
    }

    /// Add the kind of the bound value
    pub fn with_value_kind(mut self, kind: ValueKind) -> Self {
        self.value_kind = Some(kind);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the rendered diff of the two compared values
    pub fn with_diff(mut self, diff: impl Into<String>) -> Self {
        self.diff = Some(diff.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the check name, if any
    pub fn check(&self) -> Option<&str> {
        self.check.as_deref()
    }

    /// Get the bound value's kind, if known
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.value_kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the rendered diff, if any
    pub fn diff(&self) -> Option<&str> {
        self.diff.as_deref()
    }

    /// Get the original rejection, if this error came from a deferred value
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// True for assertion failures
    pub fn is_assertion(&self) -> bool {
        self.kind == ExErrorKind::AssertionFailed
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rejection) = &self.rejection {
            return write!(f, "{}", rejection);
        }
        write!(f, "[{}]", self.code())?;
        if let Some(check) = &self.check {
            write!(f, " in check '{}'", check)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.rejection
            .as_deref()
            .map(|rejection| rejection as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Dispatch and configuration failures raised by the engine itself
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XpectError {
    /// No matcher with this name in the active registry
    #[error("No such check '{name}' in the active registry")]
    UnknownCheck { name: String },

    /// Matcher exists but does not accept the bound value's kind
    #[error("Check '{name}' is not available for {kind} values")]
    UnsupportedValue { name: String, kind: ValueKind },

    /// Wrong number of arguments
    #[error("Check '{name}' expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        name: String,
        expected: String,
        actual: usize,
    },

    /// Argument of the wrong kind
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Pending outcome returned to a synchronous caller
    #[error("Check '{name}' settles asynchronously and must be awaited")]
    Unsettled { name: String },

    /// Render configuration could not be loaded
    #[error("Invalid render config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<XpectError> for ExError {
    fn from(err: XpectError) -> Self {
        let message = err.to_string();
        match err {
            XpectError::UnknownCheck { name } => ExError::new(ExErrorKind::UnknownCheck)
                .with_check(name)
                .with_message(message),
            XpectError::UnsupportedValue { name, kind } => {
                ExError::new(ExErrorKind::UnsupportedValue)
                    .with_check(name)
                    .with_value_kind(kind)
                    .with_message(message)
            }
            XpectError::ArityMismatch { name, .. } => ExError::new(ExErrorKind::ArityMismatch)
                .with_check(name)
                .with_message(message),
            XpectError::InvalidArgument { .. } => {
                ExError::new(ExErrorKind::InvalidArgument).with_message(message)
            }
            XpectError::Unsettled { name } => ExError::new(ExErrorKind::Unsettled)
                .with_check(name)
                .with_message(message),
            XpectError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }
        }
    }
}
