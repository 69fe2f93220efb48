//! Registry records
//!
//! Field names are English on the wire. The original Spanish field names
//! (`nombres`, `codigo`, ...) are accepted as aliases when deserializing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student, identified by `ci`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub ci: String,
    #[serde(alias = "nombres")]
    pub given_names: String,
    #[serde(alias = "apellidos")]
    pub family_names: String,
    #[serde(alias = "carrera")]
    pub program: String,
}

impl Student {
    pub fn new(
        ci: impl Into<String>,
        given_names: impl Into<String>,
        family_names: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            ci: ci.into(),
            given_names: given_names.into(),
            family_names: family_names.into(),
            program: program.into(),
        }
    }

    /// "Given Family", as printed by the CLI
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.family_names)
    }
}

/// A course, identified by `code`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "docente")]
    pub instructor: String,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            instructor: instructor.into(),
        }
    }
}

/// Confirmation that a student is enrolled in a course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enrollment {
    pub ci: String,
    #[serde(alias = "codigo")]
    pub code: String,
}

impl Enrollment {
    pub fn new(ci: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            ci: ci.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.ci, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_accepts_original_field_names() {
        let json = r#"{"ci":"1001","nombres":"Ana","apellidos":"Pérez","carrera":"Sistemas"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student, Student::new("1001", "Ana", "Pérez", "Sistemas"));
        assert_eq!(student.full_name(), "Ana Pérez");
    }

    #[test]
    fn course_serializes_english_names() {
        let course = Course::new("C101", "Algoritmos", "Dr. X");
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["code"], "C101");
        assert_eq!(value["instructor"], "Dr. X");

        let back: Course =
            serde_json::from_str(r#"{"codigo":"C101","nombre":"Algoritmos","docente":"Dr. X"}"#)
                .unwrap();
        assert_eq!(back, course);
    }

    #[test]
    fn enrollment_display() {
        assert_eq!(Enrollment::new("1001", "C101").to_string(), "1001 -> C101");
    }
}
