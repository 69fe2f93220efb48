//! The enrollment registry
//!
//! Owns students, courses and the enrollment relation between them. Every
//! operation is one check-then-mutate step; nothing here locks, so callers
//! that share a registry across tasks must serialize access themselves.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{RegistryError, Resource, Result};
use crate::model::{Course, Enrollment, Student};

/// In-memory store of students, courses and enrollments.
///
/// Lookups are keyed by identifier. Query results come back sorted by
/// identifier.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    students: BTreeMap<String, Student>,
    courses: BTreeMap<String, Course>,
    /// ci -> course codes
    by_student: BTreeMap<String, BTreeSet<String>>,
    /// code -> student cis
    by_course: BTreeMap<String, BTreeSet<String>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new student.
    ///
    /// Fails with `AlreadyExists` when a student with the same `ci` is
    /// present; the registry is left untouched in that case.
    pub fn register_student(&mut self, student: Student) -> Result<Student> {
        if self.students.contains_key(&student.ci) {
            return Err(RegistryError::already_exists(Resource::Student, student.ci));
        }
        self.students.insert(student.ci.clone(), student.clone());
        Ok(student)
    }

    /// Insert a new course. Fails with `AlreadyExists` on a duplicate `code`.
    pub fn register_course(&mut self, course: Course) -> Result<Course> {
        if self.courses.contains_key(&course.code) {
            return Err(RegistryError::already_exists(Resource::Course, course.code));
        }
        self.courses.insert(course.code.clone(), course.clone());
        Ok(course)
    }

    /// Enroll student `ci` in course `code`.
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// 1. the student exists (`NotFound`)
    /// 2. the course exists (`NotFound`)
    /// 3. the pair is not already enrolled (`AlreadyExists`)
    pub fn enroll(&mut self, ci: &str, code: &str) -> Result<Enrollment> {
        if !self.students.contains_key(ci) {
            return Err(RegistryError::not_found(Resource::Student, ci));
        }
        if !self.courses.contains_key(code) {
            return Err(RegistryError::not_found(Resource::Course, code));
        }

        let enrollment = Enrollment::new(ci, code);
        if self.is_enrolled(ci, code) {
            return Err(RegistryError::already_exists(
                Resource::Enrollment,
                enrollment.to_string(),
            ));
        }

        self.by_student
            .entry(ci.to_owned())
            .or_default()
            .insert(code.to_owned());
        self.by_course
            .entry(code.to_owned())
            .or_default()
            .insert(ci.to_owned());

        Ok(enrollment)
    }

    /// Courses the student is enrolled in. Empty if the student has none.
    pub fn courses_for_student(&self, ci: &str) -> Result<Vec<Course>> {
        if !self.students.contains_key(ci) {
            return Err(RegistryError::not_found(Resource::Student, ci));
        }

        let courses = self
            .by_student
            .get(ci)
            .into_iter()
            .flatten()
            .filter_map(|code| self.courses.get(code))
            .cloned()
            .collect();
        Ok(courses)
    }

    /// Students enrolled in the course. Empty if nobody is.
    pub fn students_for_course(&self, code: &str) -> Result<Vec<Student>> {
        if !self.courses.contains_key(code) {
            return Err(RegistryError::not_found(Resource::Course, code));
        }

        let students = self
            .by_course
            .get(code)
            .into_iter()
            .flatten()
            .filter_map(|ci| self.students.get(ci))
            .cloned()
            .collect();
        Ok(students)
    }

    pub fn student(&self, ci: &str) -> Option<&Student> {
        self.students.get(ci)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn is_enrolled(&self, ci: &str, code: &str) -> bool {
        self.by_student
            .get(ci)
            .is_some_and(|codes| codes.contains(code))
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.by_student.values().map(BTreeSet::len).sum()
    }
}
