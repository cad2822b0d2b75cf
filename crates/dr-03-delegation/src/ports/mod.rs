//! # Ports Layer
//!
//! The delegation service is driven through [`inbound::DelegationApi`]. Its
//! driven side is the signer check from `dr-01-signature-verification` and
//! the ledger API from `dr-02-submission-ledger`.

pub mod inbound;
