//! Concurrent acronym extraction over many documents.
//!
//! Extraction is CPU-bound and synchronous, so each document runs on the
//! blocking pool. The extractor is shared read-only; every call owns its own
//! accumulator, so no coordination between workers is needed.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinSet;

use super::extraction::{AcronymCandidate, CandidateExtractor, ExtractionError};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Worker failed: {0}")]
    Worker(String),
}

/// One document to process.
#[derive(Debug, Clone)]
pub struct BatchDocument {
    pub id: String,
    pub text: String,
}

impl BatchDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Result for one document, in input order.
#[derive(Debug)]
pub struct DocumentOutcome {
    pub document_id: String,
    pub result: Result<Vec<AcronymCandidate>, BatchError>,
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub documents: usize,
    pub failed: usize,
    pub candidates: usize,
    pub duration_ms: u64,
}

/// Run `extractor` over every document on the blocking pool.
///
/// Returns one outcome per document, in the order given. A failing or
/// panicking worker only affects its own document.
pub async fn extract_documents(
    extractor: Arc<dyn CandidateExtractor>,
    documents: Vec<BatchDocument>,
) -> Vec<DocumentOutcome> {
    let start = Instant::now();
    let count = documents.len();
    let ids: Vec<String> = documents.iter().map(|d| d.id.clone()).collect();

    let mut set = JoinSet::new();
    for (index, document) in documents.into_iter().enumerate() {
        let extractor = Arc::clone(&extractor);
        set.spawn_blocking(move || (index, extractor.extract(&document.text)));
    }

    let mut slots: Vec<Option<Result<Vec<AcronymCandidate>, BatchError>>> =
        (0..count).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, result)) => slots[index] = Some(result.map_err(BatchError::from)),
            Err(e) => {
                // The index is lost with the task; the slot stays empty and is
                // reported below.
                tracing::error!(error = %e, "Batch worker failed");
            }
        }
    }

    let outcomes: Vec<DocumentOutcome> = ids
        .into_iter()
        .zip(slots)
        .map(|(document_id, slot)| DocumentOutcome {
            result: slot.unwrap_or_else(|| {
                Err(BatchError::Worker(format!(
                    "worker for document {document_id} did not complete"
                )))
            }),
            document_id,
        })
        .collect();

    let summary = summarize(&outcomes, start.elapsed().as_millis() as u64);
    tracing::info!(
        documents = summary.documents,
        failed = summary.failed,
        candidates = summary.candidates,
        duration_ms = summary.duration_ms,
        "Batch extraction complete"
    );
    outcomes
}

/// Count documents, failures and records across outcomes.
pub fn summarize(outcomes: &[DocumentOutcome], duration_ms: u64) -> BatchSummary {
    let mut summary = BatchSummary {
        documents: outcomes.len(),
        duration_ms,
        ..Default::default()
    };
    for outcome in outcomes {
        match &outcome.result {
            Ok(candidates) => summary.candidates += candidates.len(),
            Err(_) => summary.failed += 1,
        }
    }
    summary
}
