use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage {operation} failed for key '{key}': {message}")]
    StorageError {
        key: String,
        operation: String,
        message: String,
    },

    #[error("Unknown course: {name}")]
    UnknownCourse { name: String },

    #[error("Unknown screen: {name}")]
    UnknownScreen { name: String },

    #[error("Checkout requires at least one selected course")]
    EmptySelection,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Catalog,
    Checkout,
    Authentication,
    Validation,
    Navigation,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn storage(key: &str, operation: &str, message: impl Into<String>) -> Self {
        Self::StorageError {
            key: key.to_string(),
            operation: operation.to_string(),
            message: message.into(),
        }
    }

    pub fn unknown_course(name: &str) -> Self {
        Self::UnknownCourse {
            name: name.to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) | Self::StorageError { .. } => {
                ErrorCategory::Storage
            }
            Self::UnknownCourse { .. } => ErrorCategory::Catalog,
            Self::EmptySelection => ErrorCategory::Checkout,
            Self::InvalidCredentials => ErrorCategory::Authentication,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::UnknownScreen { .. } => ErrorCategory::Navigation,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Authentication => ErrorSeverity::Low,
            ErrorCategory::Checkout | ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Navigation => ErrorSeverity::High,
            // a name outside the closed catalog means a caller bug
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    /// Failures scoped to the key-value store, which handlers turn into alerts.
    pub fn is_storage_failure(&self) -> bool {
        self.category() == ErrorCategory::Storage
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(_) | Self::SerializationError(_) | Self::StorageError { .. } => {
                "Could not access local storage.".to_string()
            }
            Self::UnknownCourse { name } => format!("'{}' is not one of our courses.", name),
            Self::UnknownScreen { name } => format!("There is no screen called '{}'.", name),
            Self::EmptySelection => "You have not selected any courses yet.".to_string(),
            Self::InvalidCredentials => "Invalid username or password.".to_string(),
            Self::ValidationError { message, .. } => message.clone(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Storage => "Check that the store directory exists and is writable",
            ErrorCategory::Catalog => "Run `courses` to list the available course names",
            ErrorCategory::Checkout => "Enroll in at least one course before checking out",
            ErrorCategory::Authentication => "Register an account or check your credentials",
            ErrorCategory::Validation => "Correct the highlighted field and try again",
            ErrorCategory::Navigation => "Use one of the known screen names",
            ErrorCategory::Configuration => "Review the configuration file and CLI flags",
        }
    }
}
