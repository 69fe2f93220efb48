//! Client commands: one per registry operation
//!
//! These talk to a running `enrollctl serve` over HTTP.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enrollctl_core::{Course, Student};

use crate::client::EnrollmentClient;

#[derive(Parser, Debug)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: StudentCommands,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Register a new student
    Add(AddStudentArgs),
}

#[derive(Parser, Debug)]
pub struct AddStudentArgs {
    /// Student identifier (unique)
    #[arg(long)]
    pub ci: String,

    /// Given name(s)
    #[arg(long)]
    pub given_names: String,

    /// Family name(s)
    #[arg(long)]
    pub family_names: String,

    /// Major or program of study
    #[arg(long)]
    pub program: String,
}

#[derive(Parser, Debug)]
pub struct CourseArgs {
    #[command(subcommand)]
    pub command: CourseCommands,
}

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// Register a new course
    Add(AddCourseArgs),
}

#[derive(Parser, Debug)]
pub struct AddCourseArgs {
    /// Course code (unique)
    #[arg(long)]
    pub code: String,

    /// Course name
    #[arg(long)]
    pub name: String,

    /// Instructor teaching the course
    #[arg(long)]
    pub instructor: String,
}

#[derive(Parser, Debug)]
pub struct EnrollArgs {
    /// Student identifier
    #[arg(long)]
    pub ci: String,

    /// Course code
    #[arg(long)]
    pub code: String,
}

#[derive(Parser, Debug)]
pub struct CoursesArgs {
    /// Student identifier whose courses to list
    pub ci: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct StudentsArgs {
    /// Course code whose students to list
    pub code: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn format_student(student: &Student) -> String {
    format!("{}  {} ({})", student.ci, student.full_name(), student.program)
}

pub fn format_course(course: &Course) -> String {
    format!("{}  {} ({})", course.code, course.name, course.instructor)
}

pub async fn run_student(args: StudentArgs, client: &EnrollmentClient) -> Result<()> {
    match args.command {
        StudentCommands::Add(args) => {
            let student = Student::new(args.ci, args.given_names, args.family_names, args.program);
            let stored = client
                .register_student(&student)
                .await
                .context("Failed to register student")?;
            println!("Student registered: {}", format_student(&stored));
        }
    }
    Ok(())
}

pub async fn run_course(args: CourseArgs, client: &EnrollmentClient) -> Result<()> {
    match args.command {
        CourseCommands::Add(args) => {
            let course = Course::new(args.code, args.name, args.instructor);
            let stored = client
                .register_course(&course)
                .await
                .context("Failed to register course")?;
            println!("Course registered: {}", format_course(&stored));
        }
    }
    Ok(())
}

pub async fn run_enroll(args: EnrollArgs, client: &EnrollmentClient) -> Result<()> {
    let response = client
        .enroll(&args.ci, &args.code)
        .await
        .context("Failed to enroll student")?;
    println!("{}", response.message);
    Ok(())
}

pub async fn run_courses(args: CoursesArgs, client: &EnrollmentClient) -> Result<()> {
    let courses = client
        .courses_for_student(&args.ci)
        .await
        .context(format!("Failed to list courses for student '{}'", args.ci))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
    } else if courses.is_empty() {
        println!("Student {} is not enrolled in any course", args.ci);
    } else {
        for course in &courses {
            println!("{}", format_course(course));
        }
    }
    Ok(())
}

pub async fn run_students(args: StudentsArgs, client: &EnrollmentClient) -> Result<()> {
    let students = client
        .students_for_course(&args.code)
        .await
        .context(format!("Failed to list students for course '{}'", args.code))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&students)?);
    } else if students.is_empty() {
        println!("No students enrolled in {}", args.code);
    } else {
        for student in &students {
            println!("{}", format_student(student));
        }
    }
    Ok(())
}
