// Courseplan - Course eligibility and scheduling conflict pipeline
// Transcript parsing, prerequisite validation, meeting-time conflict detection

pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
pub mod state;
pub mod validator;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{
    CourseCode, Day, ExistenceState, MeetingPattern, ParsedCourseSet, PrerequisiteGraph,
    PrerequisiteRule, TimeInterval, TranscriptCategory,
};
pub use state::ValidationSession;
pub use validator::PrereqValidator;
