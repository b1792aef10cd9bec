//! Idempotent provisioning core
//!
//! The read-then-write reconciliation logic against the controller:
//! creating resources while folding "already exists" into success,
//! threading created rule names into dependent policies, patching
//! thresholds inside fetched rule documents, and resolving names to ids
//! for best-effort teardown. All components speak to the controller
//! through the [`argus_controller::ControllerApi`] trait.

mod context;
mod creator;
mod error;
mod policy;
mod teardown;
mod thresholds;

pub use context::{resolve_context, RunContext};
pub use creator::ResourceCreator;
pub use error::{ProvisionError, ProvisionResult};
pub use policy::{PolicyLinker, PolicyProvision};
pub use teardown::{resolve_ids, teardown, DeletionOutcome};
pub use thresholds::ThresholdPatcher;
