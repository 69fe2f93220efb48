//! enrollctl-core: in-memory student/course enrollment registry
//!
//! Three collections (students, courses, enrollments) behind five
//! operations that enforce identifier uniqueness and referential existence.

pub mod error;
pub mod model;
pub mod registry;

pub use error::{ErrorKind, RegistryError, Resource, Result};
pub use model::{Course, Enrollment, Student};
pub use registry::Registry;
