//! Data providers
//!
//! The pipeline never talks to the mutation, cluster or annotation services
//! directly; it goes through [`DataProvider`]. [`FixtureProvider`] serves
//! the same contracts from a JSON document for offline runs and tests.

mod api;
mod fixture;

pub use api::{DataProvider, ProviderError};
pub use fixture::{FixtureProvider, GeneFixture, ProteinFixture};
