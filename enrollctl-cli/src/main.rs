//! enrollctl CLI - in-memory student/course enrollment service
//!
//! This is the main entry point for the enrollctl command-line tool, which provides:
//! - The HTTP server wrapping one in-memory registry (`serve`)
//! - Client commands for each registry operation (`student`, `course`, `enroll`, ...)
//! - A scripted end-to-end walkthrough (`demo`)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod client;
mod commands;
mod config;
mod tracing_setup;

use client::EnrollmentClient;
use config::EnrollctlConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "enrollctl",
    author,
    version,
    about = "In-memory student and course enrollment service",
    long_about = "Run an enrollment registry server and drive it from the command line. \
                  Students and courses are unique by identifier; enrollments link one \
                  student to one course at most once."
)]
struct Cli {
    /// Path to the config file (default: ~/.enrollctl/config.toml)
    #[arg(long, global = true, env = "ENROLLCTL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Server URL for client commands (default: http://127.0.0.1:50051)
    #[arg(long, global = true, env = "ENROLLCTL_URL", value_name = "URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Student operations (add)
    Student(commands::records::StudentArgs),
    /// Course operations (add)
    Course(commands::records::CourseArgs),
    /// Enroll a student in a course
    Enroll(commands::records::EnrollArgs),
    /// List the courses a student is enrolled in
    Courses(commands::records::CoursesArgs),
    /// List the students enrolled in a course
    Students(commands::records::StudentsArgs),
    /// Walk through every operation against a server, checking each outcome
    Demo(commands::demo::DemoArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EnrollctlConfig::load(cli.config.as_deref())?;
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        level: config.log_level.clone(),
    })?;

    let url = config.client_url(cli.url.as_deref());
    let client = || EnrollmentClient::new(&url);

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &config).await?,
        Commands::Student(args) => commands::run_student(args, &client()?).await?,
        Commands::Course(args) => commands::run_course(args, &client()?).await?,
        Commands::Enroll(args) => commands::run_enroll(args, &client()?).await?,
        Commands::Courses(args) => commands::run_courses(args, &client()?).await?,
        Commands::Students(args) => commands::run_students(args, &client()?).await?,
        Commands::Demo(args) => commands::run_demo(args, &url).await?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
