//! # Ledger State
//!
//! The three append-only maps and the write batches applied to them.
//!
//! ## Invariants
//!
//! - At most one record per (submitter, dataHash, da)
//! - A DA id enters the provider index only when its record is created, so the
//!   index never holds duplicates and preserves first-submission order
//! - Nothing is ever removed

use super::errors::LedgerError;
use shared_types::{Address, Cid, DaId, DaPointer, DataHash, SubmissionKey, SubmissionRecord};
use std::collections::{HashMap, HashSet};

/// Read access to a ledger snapshot.
pub trait LedgerView {
    /// The CID recorded under `key`.
    fn cid(&self, key: &SubmissionKey) -> Option<&Cid>;

    /// DA ids recorded for (submitter, dataHash), in first-submission order.
    fn providers(&self, submitter: &Address, data_hash: &DataHash) -> &[DaId];

    /// Addresses `submitter` has extended, in declaration order.
    fn extensions(&self, submitter: &Address) -> &[Address];

    /// Whether a record exists under `key`.
    fn contains(&self, key: &SubmissionKey) -> bool {
        self.cid(key).is_some()
    }

    /// Provider index paired with recorded CIDs.
    fn all_direct(&self, submitter: &Address, data_hash: &DataHash) -> Vec<DaPointer> {
        self.providers(submitter, data_hash)
            .iter()
            .filter_map(|da| {
                self.cid(&SubmissionKey::new(*submitter, *data_hash, *da))
                    .map(|cid| DaPointer::new(*da, cid.clone()))
            })
            .collect()
    }
}

impl<T: LedgerView + ?Sized> LedgerView for std::sync::Arc<T> {
    fn cid(&self, key: &SubmissionKey) -> Option<&Cid> {
        (**self).cid(key)
    }

    fn providers(&self, submitter: &Address, data_hash: &DataHash) -> &[DaId] {
        (**self).providers(submitter, data_hash)
    }

    fn extensions(&self, submitter: &Address) -> &[Address] {
        (**self).extensions(submitter)
    }
}

/// A single ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerOp {
    /// Create a submission record.
    Submission(SubmissionRecord),
    /// Append `old_submitter` to `submitter`'s extension edges.
    Extension {
        submitter: Address,
        old_submitter: Address,
    },
}

/// Ordered group of mutations committed all-or-nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<LedgerOp>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(record: SubmissionRecord) -> Self {
        Self {
            ops: vec![LedgerOp::Submission(record)],
        }
    }

    pub fn extension(submitter: Address, old_submitter: Address) -> Self {
        Self {
            ops: vec![LedgerOp::Extension {
                submitter,
                old_submitter,
            }],
        }
    }

    pub fn push(&mut self, op: LedgerOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[LedgerOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<SubmissionRecord> for WriteBatch {
    fn from_iter<I: IntoIterator<Item = SubmissionRecord>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().map(LedgerOp::Submission).collect(),
        }
    }
}

/// In-order admission check for a batch against a snapshot.
///
/// Rejects empty CIDs and keys already present either in the snapshot or
/// earlier in the same batch. The first failure wins.
pub struct BatchValidator<'a, V: LedgerView + ?Sized> {
    view: &'a V,
    staged: HashSet<SubmissionKey>,
}

impl<'a, V: LedgerView + ?Sized> BatchValidator<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self {
            view,
            staged: HashSet::new(),
        }
    }

    /// Admit the next record of the batch.
    pub fn admit(&mut self, record: &SubmissionRecord) -> Result<(), LedgerError> {
        if record.cid.is_empty() {
            return Err(LedgerError::EmptyCid);
        }

        let key = record.key();
        if self.view.contains(&key) || !self.staged.insert(key) {
            return Err(LedgerError::DuplicateSubmission {
                submitter: record.submitter,
                data_hash: record.data_hash,
                da: record.da,
            });
        }

        Ok(())
    }

    /// Check every submission in `batch`; extension ops always pass.
    pub fn admit_batch(&mut self, batch: &WriteBatch) -> Result<(), LedgerError> {
        for op in batch.ops() {
            if let LedgerOp::Submission(record) = op {
                self.admit(record)?;
            }
        }
        Ok(())
    }
}

/// The full ledger contents.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    records: HashMap<SubmissionKey, Cid>,
    providers: HashMap<(Address, DataHash), Vec<DaId>>,
    extensions: HashMap<Address, Vec<Address>>,
}

impl LedgerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an already validated batch.
    pub fn apply(&mut self, batch: WriteBatch) {
        for op in batch.ops {
            match op {
                LedgerOp::Submission(record) => {
                    let key = record.key();
                    self.records.insert(key, record.cid);
                    self.providers
                        .entry((record.submitter, record.data_hash))
                        .or_default()
                        .push(record.da);
                }
                LedgerOp::Extension {
                    submitter,
                    old_submitter,
                } => {
                    self.extensions
                        .entry(submitter)
                        .or_default()
                        .push(old_submitter);
                }
            }
        }
    }

    /// Validate `batch` against this state, then apply it.
    pub fn try_apply(&mut self, batch: WriteBatch) -> Result<(), LedgerError> {
        BatchValidator::new(&*self).admit_batch(&batch)?;
        self.apply(batch);
        Ok(())
    }

    /// Total number of submission records.
    pub fn submission_count(&self) -> usize {
        self.records.len()
    }

    /// Total number of extension edges.
    pub fn extension_count(&self) -> usize {
        self.extensions.values().map(Vec::len).sum()
    }
}

impl LedgerView for LedgerState {
    fn cid(&self, key: &SubmissionKey) -> Option<&Cid> {
        self.records.get(key)
    }

    fn providers(&self, submitter: &Address, data_hash: &DataHash) -> &[DaId] {
        self.providers
            .get(&(*submitter, *data_hash))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn extensions(&self, submitter: &Address) -> &[Address] {
        self.extensions
            .get(submitter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
