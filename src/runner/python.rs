use std::io;
use std::path::Path;
use std::process::Command;

use crate::discover;
use crate::models::Language;

use super::{print_banner, report_exit, RunReport};

pub(super) fn run_python(
    root: &Path,
    category: &str,
    problem: &str,
    attempt: &str,
) -> Result<RunReport, String> {
    let file_path = discover::attempts_dir(root, category, problem, Language::Python)
        .join(format!("{}.py", attempt));

    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()));
    }

    print_banner(Language::Python, category, problem, attempt, &file_path);

    let status = Command::new("python3")
        .arg(&file_path)
        .status()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                "Python interpreter (python3) not found. Make sure Python is installed and in PATH."
                    .to_string()
            }
            _ => format!("Failed to run python3: {}", e),
        })?;

    Ok(report_exit(status))
}
