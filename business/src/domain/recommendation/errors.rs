/// Failures of the AI selection path. Every variant is recovered locally by
/// the orchestrator through deterministic fallback; none reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection.quota_exceeded")]
    QuotaExceeded,
    #[error("selection.service_unavailable")]
    ServiceUnavailable,
    #[error("selection.malformed_response")]
    MalformedResponse,
    #[error("selection.invalid_selection")]
    InvalidSelection,
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
