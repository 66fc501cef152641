//! Card system: identities and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card identity
//! - `CardDefinition`: Immutable display identity, supplied by the host
//! - `CardCatalog`: Definition lookup with stable insertion order
//!
//! The engine never touches image assets or layout; a definition is an
//! id plus whatever name the host wants to render.

pub mod definition;
pub mod catalog;

pub use definition::{CardDefinition, CardId};
pub use catalog::CardCatalog;
