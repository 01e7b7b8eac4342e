//! ID type wrappers for type safety.

mod id_macro;

pub mod candidate_id;
pub mod user_id;

pub use candidate_id::CandidateId;
pub use user_id::UserId;
