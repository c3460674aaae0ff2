//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to audit records.
pub type Timestamp = DateTime<Utc>;
