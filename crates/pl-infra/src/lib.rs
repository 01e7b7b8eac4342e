pub mod memory;
pub mod models;
pub mod repositories;
pub mod rest;
pub mod time;

pub use memory::InMemoryStore;
pub use repositories::{RestCandidateRepository, RestOnboardingStepRepository};
pub use rest::RestClient;
pub use time::SystemClock;
