//! Core identifier types shared between the scheduling core and its
//! collaborators.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one queued unit of scan work.
///
/// The job itself is owned by the persistence layer; the scheduling core
/// only ever references it by value.
pub type JobId = Uuid;

/// Identifier of one active encryption key pool (a key generation/epoch).
///
/// While a key rotation is in progress the set of currently usable pool
/// ids is non-empty; jobs encrypted under a pool outside that set must be
/// suspended before anything else is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncryptionPoolId(pub i64);

impl fmt::Display for EncryptionPoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EncryptionPoolId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Set of currently active encryption pool ids.
pub type EncryptionPoolIds = HashSet<EncryptionPoolId>;
