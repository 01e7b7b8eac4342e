use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Primary key of a row in the `candidates` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl_id!(CandidateId);
