//! Route handlers organized by resource

pub mod courses;
pub mod enrollments;
pub mod health;
pub mod students;

pub use courses::{CourseResponse, CourseStudentsResponse};
pub use enrollments::{EnrollRequest, EnrollResponse};
pub use health::HealthResponse;
pub use students::{StudentCoursesResponse, StudentResponse};
