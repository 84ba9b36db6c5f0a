//! Mutation operations over the in-memory [`Store`]
//!
//! Each submodule covers one entity family. Operations take `&mut Store`,
//! validate references and uniqueness against the current arena contents,
//! and apply referential clean-up (nulling or removing dependents) the same
//! way the relational schema's delete actions do, so the arena never drifts
//! from what persistence would produce.

pub(crate) mod company_ops;
pub(crate) mod department_ops;
pub(crate) mod employee_ops;
mod store;
pub(crate) mod team_ops;

pub use store::Store;
