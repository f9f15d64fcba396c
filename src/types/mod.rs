// src/types/mod.rs
//! Data shapes shared by the store client, the engine and the controller

pub mod criteria;
pub mod job;
pub mod response;

pub use criteria::{FilterCriteria, SortOrder};
pub use job::{Job, JobDraft, JobId, JobPatch, JobType};
pub use response::{Aggregate, HealthStatus, Stats};
