mod clause;
mod link;
mod prereq;
mod scrape;
mod settings;
mod structs;

use clap::{Parser, Subcommand};
use log::info;
use serde::{de::DeserializeOwned, Serialize};
use settings::Settings;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use structs::*;

#[derive(Parser)]
/// Scrapes course prerequisites and links them to catalog ids.
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch every listed course page and write the prerequisites found
    Extract {
        #[arg(long, default_value = "updated_courses_v2.json")]
        courses: PathBuf,
        #[arg(long, default_value = "prerequisite_data.json")]
        output: PathBuf,
    },
    /// Resolve extracted prerequisites to catalog ids
    Link {
        #[arg(long, default_value = "prerequisite_data.json")]
        input: PathBuf,
        #[arg(long, default_value = "course_catalog.json")]
        catalog: PathBuf,
        #[arg(long, default_value = "prerequisite_rows.json")]
        output: PathBuf,
    },
    /// Parse a single prerequisite clause and print it
    Parse { text: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Args::parse().command {
        Command::Extract { courses, output } => {
            let settings = Settings::load()?;
            let courses: Vec<CourseListing> = read_json(&courses)?;
            info!("checking prerequisites of {} courses", courses.len());
            let found = scrape::extract(&settings, &courses).await?;
            write_json(&output, &found)?;
            info!("{} written, {} courses with prerequisites", output.display(), found.len());
        }
        Command::Link {
            input,
            catalog,
            output,
        } => {
            let entries: Vec<CoursePrerequisites> = read_json(&input)?;
            let catalog: Vec<CatalogCourse> = read_json(&catalog)?;
            let report = link::link(&entries, &catalog);
            write_json(&output, &report.rows)?;
            info!("{} prerequisite rows written", report.rows.len());
            info!(
                "{} courses skipped (main course not in catalog), {} prerequisites unresolved",
                report.skipped_courses, report.missing_prerequisites
            );
        }
        Command::Parse { text } => {
            println!("{}", serde_json::to_string_pretty(&prereq::parse(&text))?);
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_files_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prerequisite_data.json");
        let entries = vec![CoursePrerequisites {
            course_subject: "CS".into(),
            course_code: "204".into(),
            prerequisites: vec![PrerequisiteTerm {
                subject: "CS".into(),
                course_code: "201".into(),
                is_and: false,
            }],
        }];

        write_json(&path, &entries).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"course_subject\": \"CS\""));

        let back: Vec<CoursePrerequisites> = read_json(&path).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn test_read_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing: Result<Vec<CatalogCourse>, _> = read_json(&dir.path().join("nope.json"));
        assert!(missing.is_err());
    }
}
