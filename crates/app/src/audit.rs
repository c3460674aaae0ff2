//! Best-effort audit trail wrapped around an [`AuditLog`] port.

use pothub_domain::audit::AuditEntry;

use crate::ports::AuditLog;

/// Appends audit records without ever failing the caller.
///
/// A failed append is logged at `WARN` and dropped. Nothing is retried and
/// nothing is rolled back: the primary mutation has already been committed
/// by the time a record is written.
pub struct AuditTrail<A> {
    log: A,
}

impl<A: AuditLog> AuditTrail<A> {
    /// Wrap an audit log port.
    pub fn new(log: A) -> Self {
        Self { log }
    }

    /// Attempt to append one record.
    pub async fn record(&self, entry: AuditEntry) {
        let action = entry.action.clone();
        match self.log.append(entry).await {
            Ok(record) => tracing::debug!(audit_id = record.id, %action, "audit record appended"),
            Err(err) => tracing::warn!(error = %err, %action, "failed to append audit record"),
        }
    }
}
