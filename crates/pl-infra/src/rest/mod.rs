//! REST client for the remote relational store (PostgREST dialect).

mod client;
mod error;
mod query;

pub use client::{RestClient, REST_PATH};
pub use error::{map_reqwest_error, map_status_error};
pub use query::TableQuery;
