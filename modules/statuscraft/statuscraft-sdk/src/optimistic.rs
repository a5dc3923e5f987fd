//! Optimistic status application with an explicit rollback path.
//!
//! Status updates are latency-sensitive: the UI applies the new status to
//! its locally cached `User` before the backing write confirms. The guard
//! returned by [`OptimisticStatus::apply`] captures the inverse patch so a
//! failed write can restore the exact pre-update view.

use crate::models::{normalize_comment, Status, User};

/// Inverse patch captured when a status change is applied optimistically.
///
/// Consume with [`rollback`](Self::rollback) if the backing write fails, or
/// drop it once the write is confirmed.
#[must_use = "dropping the guard without rollback discards the inverse patch"]
#[derive(Debug)]
pub struct OptimisticStatus {
    prior_status: Status,
    prior_comment: Option<String>,
}

impl OptimisticStatus {
    /// Apply `status` and `comment` to the local view immediately and
    /// capture the previous values. The comment follows the caller
    /// convention: blank comments clear the field.
    pub fn apply(view: &mut User, status: Status, comment: Option<String>) -> Self {
        let guard = Self {
            prior_status: view.status,
            prior_comment: view.status_comment.take(),
        };
        view.status = status;
        view.status_comment = normalize_comment(comment);
        guard
    }

    /// Restore the view to its pre-update values.
    pub fn rollback(self, view: &mut User) {
        view.status = self.prior_status;
        view.status_comment = self.prior_comment;
    }
}
