//! Command implementations for enrollctl CLI

pub mod demo;
pub mod records;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use demo::run_demo;
pub use records::{run_course, run_courses, run_enroll, run_student, run_students};
pub use serve::run_serve;
