//! Side-channel reporting for swallowed settings failures.

use tracing::warn;

use crate::SettingsError;

/// Receives the errors a [`Setting`](crate::Setting) swallows.
///
/// Settings access must never fail in the caller's lap over a
/// persistence-format incompatibility, so decode and encode failures are
/// converted to default values and reported here instead. The sink is
/// injectable to keep the facade testable without a global subscriber.
pub trait DiagnosticsSink: Send + Sync {
    /// Report a swallowed error.
    fn report(&self, error: &SettingsError);
}

/// The default sink; routes diagnostics to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, error: &SettingsError) {
        warn!("Settings operation failed: {error}");
    }
}
