//! Resolution plans, their validation, and workflow phases.

mod error;
mod phase;
mod plan;

pub use error::{PlanError, RowField};
pub use phase::ResolutionPhase;
pub use plan::{
    ComponentChange, ComponentChangeRow, DeviceSerials, FullReplacement, InstalledItemRef,
    NoChange, ParseResolutionChoiceError, ResolutionChoice, ResolutionPlan, SerialSlot,
    ValidatedFull, ValidatedPlan, ValidatedRow,
};
