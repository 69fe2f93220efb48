//! Structured error types for the enrollment registry.
//!
//! There are exactly two failure kinds. Both are expected outcomes the
//! caller can recover from, so they are returned as values and never logged
//! here. Transport layers map them onto their own status codes.

use std::fmt;
use thiserror::Error;

/// The kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Student,
    Course,
    Enrollment,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Enrollment => "enrollment",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
}

/// Error returned by registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A referenced entity is absent
    #[error("{resource} '{id}' not found")]
    NotFound { resource: Resource, id: String },

    /// A uniqueness constraint would be violated
    #[error("{resource} '{id}' already exists")]
    AlreadyExists { resource: Resource, id: String },
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    pub fn not_found(resource: Resource, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn already_exists(resource: Resource, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            resource,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
        }
    }

    pub fn resource(&self) -> Resource {
        match self {
            Self::NotFound { resource, .. } | Self::AlreadyExists { resource, .. } => *resource,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::NotFound { id, .. } | Self::AlreadyExists { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::not_found(Resource::Student, "1001");
        assert_eq!(err.to_string(), "student '1001' not found");

        let err = RegistryError::already_exists(Resource::Enrollment, "1001 -> C101");
        assert_eq!(err.to_string(), "enrollment '1001 -> C101' already exists");
    }

    #[test]
    fn test_kind_and_accessors() {
        let err = RegistryError::already_exists(Resource::Course, "C101");
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.resource(), Resource::Course);
        assert_eq!(err.id(), "C101");

        let err = RegistryError::not_found(Resource::Course, "C999");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
