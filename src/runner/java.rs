use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::discover;
use crate::models::Language;

use super::{print_banner, report_exit, RunReport};

/// Removes every `.class` file in the attempts directory when dropped,
/// so compiled artifacts never outlive the run regardless of how it
/// ends. Best-effort: removal errors are ignored.
struct ClassArtifacts {
    dir: PathBuf,
}

impl ClassArtifacts {
    fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }
}

impl Drop for ClassArtifacts {
    fn drop(&mut self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("class") {
                let _ = fs::remove_file(&path);
            }
        }
    }
}

pub(super) fn run_java(
    root: &Path,
    category: &str,
    problem: &str,
    attempt: &str,
) -> Result<RunReport, String> {
    let attempts_dir = discover::attempts_dir(root, category, problem, Language::Java);
    let file_name = format!("{}.java", attempt);
    let file_path = attempts_dir.join(&file_name);

    if !file_path.exists() {
        return Err(format!("File not found: {}", file_path.display()));
    }

    print_banner(Language::Java, category, problem, attempt, &file_path);

    let _artifacts = ClassArtifacts::new(&attempts_dir);

    println!("Compiling Java file...");
    let compile = Command::new("javac")
        .arg(&file_name)
        .current_dir(&attempts_dir)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                "Java compiler (javac) not found. Make sure Java is installed and in PATH."
                    .to_string()
            }
            _ => format!("Failed to run javac: {}", e),
        })?;

    if !compile.status.success() {
        println!("Compilation failed:");
        println!("{}", String::from_utf8_lossy(&compile.stderr));
        return Ok(RunReport {
            exit_code: compile.status.code(),
        });
    }
    println!("Compilation successful!\n");

    let source = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read {}: {}", file_path.display(), e))?;
    let class_name = detect_entry_class(&source, attempt);

    println!("Running Java program...\n");
    let status = Command::new("java")
        .arg("-cp")
        .arg(&attempts_dir)
        .arg(&class_name)
        .status()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                "Java runtime (java) not found. Make sure Java is installed and in PATH."
                    .to_string()
            }
            _ => format!("Failed to run java: {}", e),
        })?;

    Ok(report_exit(status))
}

/// Entry symbol for `java`: the identifier on the first line declaring
/// a class, else `Solution` if the source mentions it, else a name
/// derived from the attempt stem.
fn detect_entry_class(source: &str, attempt: &str) -> String {
    for line in source.lines() {
        if !line.contains("class") || !line.contains('{') {
            continue;
        }
        if let Some(rest) = line.split("class").nth(1) {
            if let Some(token) = rest.split_whitespace().next() {
                let name = token.split('{').next().unwrap_or("").trim();
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }
    }

    if source.contains("Solution") {
        return "Solution".to_string();
    }

    attempt.replace('-', "_").replace("attempt_", "")
}
