use crate::ports::FetchError;

/// Operator-visible sink for catalog load failures.
pub trait LoadDiagnosticsPort: Send + Sync {
    /// Called exactly once for a failed load.
    fn load_failed(&self, error: &FetchError);
}
