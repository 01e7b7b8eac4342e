use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of an authenticated user account.
///
/// Issued by the auth provider; a candidate row links to exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl_id!(UserId);
