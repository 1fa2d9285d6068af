//! Meeting preparation pipeline
//!
//! Request validation, rate-limit pacing, orchestration and brief assembly.

pub mod brief;
pub mod limiter;
mod orchestrator;
mod request;

pub use brief::{GeneratedSections, MeetingBrief, SECTION_HEADINGS};
pub use limiter::{FixedDelay, NoDelay, RateLimiter};
pub use orchestrator::{Orchestrator, Stage};
pub use request::{MeetingForm, MeetingRequest, ValidationError};
