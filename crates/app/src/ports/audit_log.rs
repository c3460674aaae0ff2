//! Audit log port: append-only record of mutating actions.

use std::future::Future;

use pothub_domain::audit::{AuditEntry, AuditRecord};
use pothub_domain::error::PotHubError;

/// Append-only sink for [`AuditRecord`]s.
///
/// Implementations accept any strings; the only expected failure is the
/// store being unreachable.
pub trait AuditLog {
    /// Persist one record and return it with its storage-assigned id and
    /// timestamp.
    fn append(
        &self,
        entry: AuditEntry,
    ) -> impl Future<Output = Result<AuditRecord, PotHubError>> + Send;
}

impl<T: AuditLog + Send + Sync> AuditLog for std::sync::Arc<T> {
    fn append(
        &self,
        entry: AuditEntry,
    ) -> impl Future<Output = Result<AuditRecord, PotHubError>> + Send {
        (**self).append(entry)
    }
}
