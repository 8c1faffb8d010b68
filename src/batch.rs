use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};

use crate::label::{LabelEncoder, LabelError, OutputDepth};

/// What happened to one input line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Written {
        path: PathBuf,
        checksum: String,
        sha256: String,
    },
    Duplicate,
    Invalid {
        reason: String,
    },
    Failed {
        reason: String,
    },
}

/// Per-line result, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based input line number.
    pub line: usize,
    pub id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Summary of a batch run, serialisable as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written { .. }))
    }

    pub fn duplicates(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Duplicate))
    }

    pub fn invalid(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Invalid { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// Persist the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialise report")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Turns a list of candidate IDs into label files.
///
/// Every line is handled on its own: duplicates, malformed IDs and failed
/// writes are recorded and skipped, the rest of the batch carries on.
pub struct BatchProcessor {
    encoder: LabelEncoder,
    output_dir: PathBuf,
    depth: OutputDepth,
}

impl BatchProcessor {
    pub fn new(encoder: LabelEncoder, output_dir: impl Into<PathBuf>, depth: OutputDepth) -> Self {
        Self {
            encoder,
            output_dir: output_dir.into(),
            depth,
        }
    }

    /// Process `lines` in order. Only failing to create the output directory aborts.
    pub fn run<I, S>(&self, lines: I) -> Result<BatchReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output_dir.display()
            )
        })?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        for (idx, raw) in lines.into_iter().enumerate() {
            let id = raw.as_ref().trim_end_matches('\r').to_string();
            let outcome = if !seen.insert(id.clone()) {
                info!(id = %id, "skipping duplicate id");
                Outcome::Duplicate
            } else {
                self.process(&id)
            };
            entries.push(BatchEntry {
                line: idx + 1,
                id,
                outcome,
            });
        }

        Ok(BatchReport {
            generated_at: Utc::now(),
            output_dir: self.output_dir.clone(),
            entries,
        })
    }

    fn process(&self, id: &str) -> Outcome {
        let label = match self.encoder.encode(id) {
            Ok(label) => label,
            Err(err @ LabelError::InvalidId { .. }) => {
                warn!(id, "skipping malformed id");
                return Outcome::Invalid {
                    reason: err.to_string(),
                };
            }
            Err(err) => {
                error!(id, error = %err, "failed to encode id");
                return Outcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        let written = self
            .encoder
            .write(&label, &self.output_dir, self.depth)
            .map_err(anyhow::Error::from)
            .and_then(|path| file_digest(&path).map(|digest| (path, digest)));
        match written {
            Ok((path, sha256)) => {
                info!(id, path = %path.display(), "label written");
                Outcome::Written {
                    path,
                    checksum: label.checksum.into_string(),
                    sha256,
                }
            }
            Err(err) => {
                error!(id, error = %err, "failed to write label");
                Outcome::Failed {
                    reason: format!("{err:#}"),
                }
            }
        }
    }
}

/// Hex SHA-256 of a file's contents.
pub fn file_digest(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:02x}"))
}
