//! JSON-backed glossary of acronym records.
//!
//! The file holds `{"acronyms": [...]}`. Extraction results are merged in
//! new-acronyms-only, so records already in the corpus are never replaced.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::types::{GlossaryEntry, MergeReport};
use super::GlossaryError;
use crate::pipeline::extraction::AcronymCandidate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    #[serde(default)]
    acronyms: Vec<GlossaryEntry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Self {
        Self { acronyms: entries }
    }

    /// Load from `path`. A missing file is an empty glossary.
    pub fn load(path: &Path) -> Result<Self, GlossaryError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No glossary file, starting empty");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let glossary: Self = serde_json::from_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            entries = glossary.len(),
            "Glossary loaded"
        );
        Ok(glossary)
    }

    /// Write to `path` through a sibling temp file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), GlossaryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!(path = %path.display(), entries = self.len(), "Glossary saved");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.acronyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty()
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.acronyms
    }

    pub fn contains(&self, acronym: &str) -> bool {
        self.acronyms.iter().any(|e| e.acronym == acronym)
    }

    /// Append candidates whose acronym is not yet known (exact, case-sensitive).
    pub fn merge(&mut self, candidates: Vec<AcronymCandidate>) -> MergeReport {
        let mut known: HashSet<String> = self.acronyms.iter().map(|e| e.acronym.clone()).collect();
        let mut added = Vec::new();
        let mut skipped = 0;

        for candidate in candidates {
            if !known.insert(candidate.acronym.clone()) {
                skipped += 1;
                continue;
            }
            added.push(candidate.acronym.clone());
            self.acronyms.push(candidate.into());
        }

        tracing::info!(added = added.len(), skipped, "Merged extracted acronyms into glossary");
        MergeReport {
            added,
            skipped,
            merged_at: Utc::now(),
        }
    }

    /// Case-insensitive prefix search on the acronym. Blank terms match nothing.
    pub fn search(&self, term: &str) -> Vec<&GlossaryEntry> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.acronyms
            .iter()
            .filter(|e| e.acronym.to_lowercase().starts_with(&needle))
            .collect()
    }

    /// Entries carrying `tag`, in stored order.
    pub fn with_tag(&self, tag: &str) -> Vec<&GlossaryEntry> {
        self.acronyms.iter().filter(|e| e.has_tag(tag)).collect()
    }
}
