mod java;
mod python;

use std::path::Path;
use std::process::ExitStatus;

use crate::models::Language;

#[derive(Debug)]
pub struct RunReport {
    pub exit_code: Option<i32>,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub fn run_attempt(
    root: &Path,
    category: &str,
    problem: &str,
    attempt: &str,
    language: Language,
) -> Result<RunReport, String> {
    match language {
        Language::Python => python::run_python(root, category, problem, attempt),
        Language::Java => java::run_java(root, category, problem, attempt),
    }
}

// --- Shared helpers ---

fn separator() -> String {
    "=".repeat(60)
}

fn print_banner(language: Language, category: &str, problem: &str, attempt: &str, file: &Path) {
    let line = separator();
    println!("\n{}", line);
    println!("Running {} Solution", language.display_name());
    println!("{}", line);
    println!("Category: {}", category);
    println!("Problem: {}", problem);
    println!("Attempt: {}", attempt);
    println!("File: {}", file.display());
    println!("{}\n", line);
}

fn report_exit(status: ExitStatus) -> RunReport {
    let line = separator();
    println!("\n{}", line);
    match status.code() {
        Some(code) => println!("Exit code: {}", code),
        None => println!("Terminated by signal"),
    }
    println!("{}", line);

    RunReport {
        exit_code: status.code(),
    }
}
