//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for use case inputs/outputs.

mod roster_dto;

pub use roster_dto::{RosterEvaluationDto, RosterWorksheetDto};
