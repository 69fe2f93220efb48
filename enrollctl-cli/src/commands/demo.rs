//! Scripted walkthrough of every registry operation
//!
//! Registers student 1001 and courses C101/C102, enrolls the student in
//! both, confirms a duplicate enrollment is rejected, then lists both
//! directions of the relation. Any deviation from the expected outcome is
//! an error.
//!
//! Without `--remote` a throwaway server is started on an ephemeral
//! localhost port for the duration of the run.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use enrollctl_core::{Course, Student};
use enrollctl_server::{serve_listener, AppState, ServerConfig};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::records::{format_course, format_student};
use crate::client::{ClientError, EnrollmentClient};

#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Run against the server at --url instead of an in-process one
    #[arg(long)]
    pub remote: bool,
}

pub async fn run_demo(args: DemoArgs, url: &str) -> Result<()> {
    if args.remote {
        let client = EnrollmentClient::new(url)?;
        return run_script(&client).await;
    }

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .context("Failed to bind demo server")?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let config = ServerConfig {
            bind_addr: addr,
            cors_permissive: false,
        };
        let shutdown = async {
            let _ = stop_rx.await;
        };
        serve_listener(listener, Arc::new(AppState::new()), &config, shutdown).await
    });
    tracing::debug!(%addr, "demo server started");

    let client = EnrollmentClient::new(&format!("http://{}", addr))?;
    let outcome = run_script(&client).await;

    let _ = stop_tx.send(());
    server
        .await
        .context("Demo server task failed")?
        .context("Demo server error")?;

    outcome
}

async fn run_script(client: &EnrollmentClient) -> Result<()> {
    let health = client
        .health()
        .await
        .context(format!("Server at {} is not reachable", client.base_url()))?;
    println!("Using server {} (version {})", client.base_url(), health.version);

    let student = client
        .register_student(&Student::new("1001", "Ana", "Pérez", "Sistemas"))
        .await
        .context("Failed to register student")?;
    println!("Student registered: {}", format_student(&student));

    for course in [
        Course::new("C101", "Algoritmos", "Dr. X"),
        Course::new("C102", "Bases de Datos", "Dra. Y"),
    ] {
        let stored = client
            .register_course(&course)
            .await
            .context("Failed to register course")?;
        println!("Course registered: {}", format_course(&stored));
    }

    for code in ["C101", "C102"] {
        let response = client
            .enroll(&student.ci, code)
            .await
            .context("Failed to enroll student")?;
        println!("{}", response.message);
    }

    match client.enroll(&student.ci, "C101").await {
        Err(ClientError::Conflict(message)) => {
            println!("Duplicate enrollment rejected (expected): {}", message);
        }
        Err(other) => return Err(other).context("Unexpected error on duplicate enrollment"),
        Ok(_) => bail!("Duplicate enrollment of {} in C101 was accepted", student.ci),
    }

    let courses = client
        .courses_for_student(&student.ci)
        .await
        .context("Failed to list courses for student")?;
    println!("Courses of student {}:", student.ci);
    for course in &courses {
        println!("  {}", format_course(course));
    }
    let codes: Vec<&str> = courses.iter().map(|c| c.code.as_str()).collect();
    if codes != ["C101", "C102"] {
        bail!("Expected courses [C101, C102], got {:?}", codes);
    }

    let students = client
        .students_for_course("C101")
        .await
        .context("Failed to list students for course")?;
    println!("Students in C101:");
    for s in &students {
        println!("  {}", format_student(s));
    }
    if students != [student] {
        bail!("Expected exactly student 1001 in C101");
    }

    println!("Demo completed");
    Ok(())
}
