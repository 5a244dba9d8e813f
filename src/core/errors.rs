/// All domain errors for Rosterly.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum RosterlyError {
    #[error(
        "Rosterly not initialized\n\n  \
         No .rosterly directory found here.\n  \
         Run 'rosterly init' to set up a roster in this project."
    )]
    NotInitialized,

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Employee #{id} not found\n\n  \
         Run 'rosterly list' to see the current roster."
    )]
    EmployeeNotFound { id: u32 },

    #[error(
        "Invalid date: '{value}'\n\n  \
         Expected ISO 8601 (YYYY-MM-DD), e.g. 2024-05-14"
    )]
    InvalidDate { value: String },

    #[error(
        "Joined-on date '{value}' is in the future\n\n  \
         An employee's joining date must be today or earlier."
    )]
    JoinDateInFuture { value: String },

    #[error("Roster storage error: {detail}")]
    StorageError { detail: String },

    #[error("Call log error: {detail}")]
    LogError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterlyError>;
