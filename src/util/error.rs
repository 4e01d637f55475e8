/// Authentication and authorization failures. Surfaced to the user as a
/// blocking alert; no state changes on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Admin role required")]
    AdminRequired,
}

/// Domain-operation failures. Nothing here is fatal; every variant degrades
/// to a no-op plus a user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Bulk-upload payload did not parse as a JSON array of lead objects.
    /// The collection is left unchanged.
    #[error("Invalid JSON format: {0}")]
    MalformedUpload(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
