//! # Extension Chain Walk
//!
//! Depth-first search from a starting address through its extension edges.
//! The starting address is probed first; if it yields nothing, its edges are
//! explored most recently declared first, each fully before the next.
//!
//! The walk keeps an explicit stack instead of recursing. An address already
//! expanded in the current walk is skipped: its whole subtree was searched
//! without a hit, or it is an ancestor still being searched. For any chain on
//! which plain recursion terminates, the first hit is the same.

use super::config::ResolverConfig;
use super::errors::ResolveError;
use dr_02_submission_ledger::LedgerView;
use shared_types::{Address, Cid, DaId, DaPointer, DataHash, SubmissionKey};
use std::collections::HashSet;

/// Outcome of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<T> {
    /// The first hit, if any.
    pub value: Option<T>,
    /// The address that supplied the hit.
    pub resolved_from: Option<Address>,
    /// Hops from the start to `resolved_from` (0 for a direct hit).
    pub hops: usize,
    /// Distinct addresses expanded.
    pub visited: usize,
}

impl<T> Resolution<T> {
    fn miss(visited: usize) -> Self {
        Self {
            value: None,
            resolved_from: None,
            hops: 0,
            visited,
        }
    }
}

/// Bounded walker over one ledger snapshot.
pub struct ChainWalker<'a, V: LedgerView + ?Sized> {
    view: &'a V,
    limits: ResolverConfig,
}

impl<'a, V: LedgerView + ?Sized> ChainWalker<'a, V> {
    pub fn new(view: &'a V, limits: ResolverConfig) -> Self {
        Self { view, limits }
    }

    /// Walk from `start`, returning the first address for which `probe` hits.
    pub fn walk<T>(
        &self,
        start: Address,
        mut probe: impl FnMut(&V, &Address) -> Option<T>,
    ) -> Result<Resolution<T>, ResolveError> {
        let mut stack: Vec<(Address, usize)> = vec![(start, 0)];
        let mut visited: HashSet<Address> = HashSet::new();

        while let Some((address, depth)) = stack.pop() {
            if !visited.insert(address) {
                continue;
            }
            if visited.len() > self.limits.max_visited {
                return Err(ResolveError::ChainTooDeep {
                    limit: self.limits.max_visited,
                });
            }

            if let Some(value) = probe(self.view, &address) {
                return Ok(Resolution {
                    value: Some(value),
                    resolved_from: Some(address),
                    hops: depth,
                    visited: visited.len(),
                });
            }

            let mut pending = self
                .view
                .extensions(&address)
                .iter()
                .filter(|next| !visited.contains(*next))
                .peekable();
            if pending.peek().is_none() {
                continue;
            }
            if depth >= self.limits.max_depth {
                return Err(ResolveError::ChainTooDeep {
                    limit: self.limits.max_depth,
                });
            }

            // Declaration order in, so the most recent edge pops first
            stack.extend(pending.map(|next| (*next, depth + 1)));
        }

        Ok(Resolution::miss(visited.len()))
    }

    /// Provider listing of the first address in the chain that has one.
    pub fn resolve_all(
        &self,
        start: Address,
        data_hash: &DataHash,
    ) -> Result<Resolution<Vec<DaPointer>>, ResolveError> {
        self.walk(start, |view, address| {
            let direct = view.all_direct(address, data_hash);
            (!direct.is_empty()).then_some(direct)
        })
    }

    /// CID for one DA id from the first address in the chain that has it.
    pub fn resolve_one(
        &self,
        start: Address,
        data_hash: &DataHash,
        da: &DaId,
    ) -> Result<Resolution<Cid>, ResolveError> {
        self.walk(start, |view, address| {
            view.cid(&SubmissionKey::new(*address, *data_hash, *da))
                .cloned()
        })
    }
}
