//! Structural invariants over the arena
//!
//! `invariants` holds the cycle walks and orphan/duplicate sweeps;
//! `validation` composes them into the whole-store check the apply
//! pipeline runs after structure-changing commands.

pub(crate) mod invariants;
pub(crate) mod validation;
