//! Artificial delays that make the in-memory store feel like a remote API.

use std::time::Duration;

/// Store operations with their own baseline delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    /// Snapshot of all tasks.
    List,
    /// Single lookup.
    Get,
    /// Insert.
    Create,
    /// Partial update.
    Update,
    /// Removal.
    Delete,
}

impl StoreOperation {
    /// Baseline delay before any scaling.
    #[must_use]
    pub const fn baseline(self) -> Duration {
        match self {
            Self::List | Self::Update => Duration::from_millis(300),
            Self::Get => Duration::from_millis(200),
            Self::Create => Duration::from_millis(400),
            Self::Delete => Duration::from_millis(250),
        }
    }
}

/// Scales the baseline delays; `0` disables latency entirely.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use todo_app::outbound::memory::{LatencyProfile, StoreOperation};
///
/// let half = LatencyProfile::scaled(50);
/// assert_eq!(half.delay_for(StoreOperation::Create), Duration::from_millis(200));
/// assert_eq!(LatencyProfile::disabled().delay_for(StoreOperation::Get), Duration::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    scale_percent: u32,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::scaled(100)
    }
}

impl LatencyProfile {
    /// Profile applying `scale_percent` percent of each baseline.
    #[must_use]
    pub const fn scaled(scale_percent: u32) -> Self {
        Self { scale_percent }
    }

    /// Profile with no delay at all.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::scaled(0)
    }

    /// Delay to apply before `operation` runs.
    #[must_use]
    pub fn delay_for(self, operation: StoreOperation) -> Duration {
        operation.baseline() * self.scale_percent / 100
    }

    /// Suspend the current task for the delay of `operation`.
    pub async fn pause(self, operation: StoreOperation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
