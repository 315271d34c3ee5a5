//! Brand Studio domain core.
//!
//! Pure domain logic shared by the API server and the generative client:
//!
//! - [`placement`] — aspect-ratio aware brand-overlay placement resolver.
//! - [`brand`] — brand profile types and the closed personality / icon-style /
//!   font-style vocabularies.
//! - [`user`] — user, credits, and generation-history rules.
//! - [`assets`] — occasion and marketplace asset records.
//! - [`prompt`] — prompt assembly for the generative boundary.
//! - [`store`] — explicitly constructed in-memory application state container
//!   with a broadcast change feed.
//!
//! This crate performs no I/O.

pub mod assets;
pub mod brand;
pub mod error;
pub mod placement;
pub mod prompt;
pub mod store;
pub mod types;
pub mod user;

pub use error::CoreError;
