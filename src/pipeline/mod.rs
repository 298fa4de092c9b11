//! Request orchestration
//!
//! [`SeqpeekPipeline::run`] walks one request through sanitization,
//! provider fetches, track assembly and bundle construction, ending in one
//! of the [`QueryOutcome`] states.

mod context;
mod orchestrator;
mod status;

pub use context::{GeneSelectWidget, StaticData, ViewContext, ViewRequest};
pub use orchestrator::SeqpeekPipeline;
pub use status::{QueryOutcome, QueryStatus};
