//! Course Admin command line
//!
//! Thin front end over the `course_admin` library: every command runs one
//! workflow against the backend and prints the normalized result as JSON.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use course_admin::config::{Config, LogFormat};
use course_admin::models::{CreateSubjectRequest, TimeRange};
use course_admin::service::{create_subject_with_times, Catalog};
use course_admin::views::{
    curriculum_rows, faculty_names, majors_for_faculty, report, report_failure, search_curriculums,
    search_subjects, subject_rows, Notice, Step,
};
use course_admin::{ApiClient, AppError};

#[derive(Parser)]
#[command(name = "course-admin")]
#[command(about = "Manage faculties, subjects, curricula and books on the course backend")]
struct Cli {
    /// Backend base URL (overrides COURSE_ADMIN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List faculties
    Faculties,
    /// List majors, optionally only those offered under a faculty
    Majors {
        #[arg(long)]
        faculty: Option<String>,
    },
    /// List subjects with their schedules
    Subjects {
        #[arg(long)]
        search: Option<String>,
    },
    /// List the study times of one subject
    StudyTimes { subject_id: String },
    /// List curricula
    Curriculums {
        #[arg(long)]
        search: Option<String>,
    },
    /// List uploaded books
    Books,
    /// Create a subject together with its study times
    AddSubject {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        credit: i64,
        #[arg(long)]
        major: String,
        #[arg(long)]
        faculty: String,
        /// Study time as `START,END`, e.g. `2025-08-11 09:00,2025-08-11 12:00`
        #[arg(long = "time", value_parser = parse_range)]
        times: Vec<TimeRange>,
    },
    /// Delete a curriculum
    DeleteCurriculum { id: String },
    /// Upload a book file
    UploadBook { path: PathBuf },
}

fn parse_range(input: &str) -> Result<TimeRange, String> {
    let (start, end) = input
        .split_once(',')
        .ok_or_else(|| format!("expected START,END, got {:?}", input))?;
    TimeRange::parse(start, end).map_err(|e| e.message())
}

fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so stdout stays valid JSON.
    match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(api: &ApiClient, command: Command) -> Result<Notice, Notice> {
    let catalog = Catalog::new(api.clone());
    let scope = catalog.scope();

    let (step, result) = match command {
        Command::Faculties => {
            let step = Step::LoadFaculties;
            (step, async { print_json(scope.faculties().await?) }.await)
        }
        Command::Majors { faculty } => {
            let step = Step::LoadMajors;
            let result = async {
                let majors = scope.majors().await?;
                print_json(&majors_for_faculty(majors, faculty.as_deref()))
            }
            .await;
            (step, result)
        }
        Command::Subjects { search } => {
            let step = Step::LoadSubjects;
            let result = async {
                let rows = subject_rows(scope.subjects().await?);
                print_json(&search_subjects(&rows, search.as_deref().unwrap_or_default()))
            }
            .await;
            (step, result)
        }
        Command::StudyTimes { subject_id } => {
            let step = Step::LoadStudyTimes;
            let result = async { print_json(&api.study_times(&subject_id).list_all().await?) }.await;
            (step, result)
        }
        Command::Curriculums { search } => {
            // The faculty list only feeds names into the rows.
            let faculties = match scope.faculties().await {
                Ok(list) => list,
                Err(e) => return Err(report_failure(Step::LoadFaculties, &e)),
            };
            let step = Step::LoadCurriculums;
            let result = async {
                let curriculums = api.curriculums().list_all().await?;
                let rows = curriculum_rows(&curriculums, &faculty_names(faculties));
                print_json(&search_curriculums(&rows, search.as_deref().unwrap_or_default()))
            }
            .await;
            (step, result)
        }
        Command::Books => {
            let step = Step::LoadBooks;
            (step, async { print_json(scope.books().await?) }.await)
        }
        Command::AddSubject {
            id,
            name,
            credit,
            major,
            faculty,
            times,
        } => {
            let step = Step::AddSubject;
            let request = CreateSubjectRequest {
                subject_id: id,
                subject_name: name,
                credit,
                major_id: major,
                faculty_id: faculty,
            };
            let result = async {
                let created = create_subject_with_times(api, &request, &times).await?;
                print_json(&created.subject)?;
                print_json(&created.study_times)
            }
            .await;
            (step, result)
        }
        Command::DeleteCurriculum { id } => {
            (Step::DeleteCurriculum, api.curriculums().delete(&id).await)
        }
        Command::UploadBook { path } => {
            let step = Step::UploadBook;
            let result = async { print_json(&api.books().upload(&path).await?) }.await;
            (step, result)
        }
    };

    let notice = report(step, &result);
    if notice.is_error() {
        Err(notice)
    } else {
        Ok(notice)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }

    init_logging(&config);
    tracing::debug!("Backend: {}", config.api_url);

    let api = ApiClient::from_config(&config)?;

    match run(&api, cli.command).await {
        Ok(notice) => {
            tracing::info!("{}", notice);
            Ok(())
        }
        Err(notice) => {
            eprintln!("{}", notice);
            std::process::exit(1);
        }
    }
}
