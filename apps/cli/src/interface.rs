//! Interactive console interface — evaluate a single resume against a job
//! description, or compare two resumes for their ATS score.
//!
//! Invalid selections are recoverable user errors: they print a message and
//! abort the current action without touching any scoring state (there is
//! none — every core call is stateless per invocation).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::ats::{compare, evaluate, Evaluation};
use crate::config::Config;
use crate::errors::AppError;
use crate::jd;
use crate::llm::{LlmClient, ModelKind};
use crate::resume;

pub struct Interface {
    config: Config,
    model: ModelKind,
}

impl Interface {
    pub fn new(config: Config, model: ModelKind) -> Self {
        Self { config, model }
    }

    /// Shows the main menu and runs the chosen action once.
    /// Invalid user input aborts the action with a message, never the process.
    pub async fn run(&self) -> Result<(), AppError> {
        println!("ATS Evaluation Interface");
        println!("1. Evaluate a single resume");
        println!("2. Compare two resumes");
        let choice = prompt_line("Enter your choice (1 or 2): ")?;
        let result = match choice.as_str() {
            "1" => self.evaluate_single().await,
            "2" => self.compare_two().await,
            other => {
                println!("Invalid choice '{other}'. Exiting.");
                return Ok(());
            }
        };
        match result {
            Err(AppError::InvalidInput(msg)) => {
                println!("{msg}");
                Ok(())
            }
            other => other,
        }
    }

    async fn evaluate_single(&self) -> Result<(), AppError> {
        let resume_path = self.choose_resume("Enter the resume number you want to evaluate: ")?;
        let jd_text = self.input_job_description().await?;

        let resume_text = resume::extract_text(&resume_path)?;
        let fields = resume::parse_fields(&resume_text);
        println!(
            "\nCandidate: {} <{}> {}",
            fields.name, fields.email, fields.phone
        );

        let result = evaluate(&resume_text, &jd_text);
        print_evaluation("ATS Evaluation Result", &result);
        Ok(())
    }

    async fn compare_two(&self) -> Result<(), AppError> {
        println!("\nSelect the first resume:");
        let first_path = self.choose_resume("Enter the first resume number: ")?;
        println!("\nSelect the second resume:");
        let second_path = self.choose_resume("Enter the second resume number: ")?;
        let jd_text = self.input_job_description().await?;

        let first_text = resume::extract_text(&first_path)?;
        let second_text = resume::extract_text(&second_path)?;

        let result = compare(&first_text, &second_text, &jd_text);
        print_evaluation("ATS Evaluation for Resume 1", &result.first);
        print_evaluation("ATS Evaluation for Resume 2", &result.second);
        println!("\n{}", result.verdict);
        Ok(())
    }

    /// Lists the available resumes and asks for a number. A bad selection is
    /// an `InvalidInput` error, reported by `run` and never fatal.
    fn choose_resume(&self, prompt: &str) -> Result<PathBuf, AppError> {
        let files = resume::list_resume_files(Path::new(&self.config.data_dir))?;
        if files.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "No PDF resumes found in the data folder '{}'.",
                self.config.data_dir
            )));
        }

        println!("\nAvailable Resumes:");
        for (idx, file) in files.iter().enumerate() {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("{}. {}", idx + 1, name);
        }

        let choice = prompt_line(prompt)?;
        select_file(&files, &choice)
    }

    /// Prompts for the job description. Pasted text is used verbatim; a URL
    /// routes through the web fetch + LLM extraction pipeline and is
    /// flattened to plain text for the scorer.
    async fn input_job_description(&self) -> Result<String, AppError> {
        println!("\nEnter the job description text, or a job posting URL:");
        let input = prompt_line("")?;
        if !is_url(&input) {
            return Ok(input);
        }

        let api_key = self.config.api_key_for(self.model)?;
        let llm = LlmClient::new(self.model, api_key);
        println!(
            "Fetching job posting and extracting details via {}...",
            self.model.display_name()
        );

        let html = jd::fetch_webpage(&input).await?;
        let text = jd::visible_text(&html);
        let details = jd::extract_job_details(&text, &llm).await?;
        Ok(details.flatten())
    }
}

fn print_evaluation(label: &str, result: &Evaluation) {
    println!("\n{label}:");
    println!("ATS Score: {}/100", result.score);
    println!("Keywords Matched: {:?}", result.matched);
    println!("Keywords Missing: {:?}", result.missing);
}

fn prompt_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Resolves a 1-based numeric selection against the listed files.
fn select_file(files: &[PathBuf], input: &str) -> Result<PathBuf, AppError> {
    match parse_selection(input, files.len()) {
        Some(index) => Ok(files[index].clone()),
        None => {
            warn!(input = %input, "invalid resume selection");
            Err(AppError::InvalidInput(format!(
                "Invalid selection '{}'.",
                input.trim()
            )))
        }
    }
}

/// Parses a 1-based menu selection into a 0-based index, rejecting
/// non-numeric, zero, and out-of-range input.
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let number: usize = input.trim().parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < len).then_some(index)
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}
