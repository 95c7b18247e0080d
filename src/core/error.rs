pub type Result<T, E = SyncError> = std::result::Result<T, E>;

/// Failures surfaced by a [`SheetHost`](super::SheetHost) or a table pass.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The host has no table with this name.
    #[error("table not found: \"{name}\"")]
    TableNotFound { name: String },
    /// Any other read/write failure reported by the host.
    #[error("host error: {message}")]
    Host { message: String },
}

impl SyncError {
    pub fn table_not_found(name: impl Into<String>) -> Self {
        Self::TableNotFound { name: name.into() }
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }
}
