//! Typed view of the engine's search response envelope.

use serde::Deserialize;

use crate::domain::user::UserDocument;

/// Top-level search response. Only the hit list is consumed; score and shard
/// bookkeeping are left to the engine.
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    hits: HitsDto,
}

#[derive(Debug, Deserialize)]
struct HitsDto {
    hits: Vec<HitDto>,
}

#[derive(Debug, Deserialize)]
struct HitDto {
    #[serde(rename = "_source")]
    source: UserDocument,
}

impl SearchResponseDto {
    /// Unwrap the stored documents in the engine's relevance order.
    pub(super) fn into_documents(self) -> Vec<UserDocument> {
        self.hits.hits.into_iter().map(|hit| hit.source).collect()
    }
}
