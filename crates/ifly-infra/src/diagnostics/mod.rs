use ifly_core::ports::{FetchError, LoadDiagnosticsPort};

/// Reports catalog load failures to the tracing log sink.
#[derive(Debug, Clone, Default)]
pub struct TracingLoadDiagnostics {
    endpoint: String,
}

impl TracingLoadDiagnostics {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl LoadDiagnosticsPort for TracingLoadDiagnostics {
    fn load_failed(&self, error: &FetchError) {
        let kind = match error {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        };
        tracing::error!(
            endpoint = %self.endpoint,
            kind,
            error = %error,
            "Error fetching catalog listings"
        );
    }
}
