//! Structure model: the syntactic scopes changes are attributed to.
//!
//! Structures live in a per-file arena ([`FileStructures`]) and refer to their
//! parent by [`StructureId`], so the hierarchy has no ownership cycles and a
//! finished arena can be shared read-only.

mod model;

#[cfg(test)]
mod tests;

pub use model::{BoundaryKind, FileStructures, NewStructure, Structure, StructureId, StructureKind};
