use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Language;

pub fn problems_dir(root: &Path, category: &str) -> PathBuf {
    root.join(category).join("problems")
}

pub fn attempts_dir(root: &Path, category: &str, problem: &str, language: Language) -> PathBuf {
    problems_dir(root, category)
        .join(problem)
        .join("attempts")
        .join(language.dir_name())
}

/// Top-level directories that look like categories: not hidden, and
/// holding a `problems/` subdirectory.
pub fn find_categories(root: &Path) -> Vec<String> {
    let mut categories = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return categories,
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if entry.path().is_dir() && entry.path().join("problems").is_dir() {
            categories.push(name);
        }
    }

    categories.sort();
    categories
}

pub fn find_problems(root: &Path, category: &str) -> Vec<String> {
    let mut problems = Vec::new();

    let entries = match fs::read_dir(problems_dir(root, category)) {
        Ok(entries) => entries,
        Err(_) => return problems,
    };

    for entry in entries.flatten() {
        if entry.path().is_dir() {
            problems.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    problems.sort();
    problems
}

/// Attempt file stems for one problem/language pair, ordered by attempt
/// number with lexicographic tie-break.
pub fn find_attempts(root: &Path, category: &str, problem: &str, language: Language) -> Vec<String> {
    let mut attempts = Vec::new();

    let entries = match fs::read_dir(attempts_dir(root, category, problem, language)) {
        Ok(entries) => entries,
        Err(_) => return attempts,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(language.extension()) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            attempts.push(stem.to_string());
        }
    }

    attempts.sort_by(|a, b| {
        attempt_number(a)
            .cmp(&attempt_number(b))
            .then_with(|| a.cmp(b))
    });
    attempts
}

pub fn latest_attempt(
    root: &Path,
    category: &str,
    problem: &str,
    language: Language,
) -> Option<String> {
    find_attempts(root, category, problem, language).pop()
}

/// Ordering key for an attempt stem: the numeric token after the first
/// underscore (`attempt_10` -> 10). Anything else sorts as 0.
pub fn attempt_number(stem: &str) -> u32 {
    stem.split('_')
        .nth(1)
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_attempt_number() {
        assert_eq!(attempt_number("attempt_1"), 1);
        assert_eq!(attempt_number("attempt_10"), 10);
        assert_eq!(attempt_number("solution"), 0);
        assert_eq!(attempt_number("attempt_x"), 0);
        assert_eq!(attempt_number("attempt_"), 0);
        assert_eq!(attempt_number("final_3_fix"), 3);
    }

    #[test]
    fn test_categories_require_problems_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("arrays").join("problems")).unwrap();
        fs::create_dir_all(dir.path().join("trees").join("problems")).unwrap();
        fs::create_dir_all(dir.path().join("notes")).unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        assert_eq!(find_categories(dir.path()), vec!["arrays", "trees"]);
    }

    #[test]
    fn test_problems_sorted() {
        let dir = TempDir::new().unwrap();
        let problems = dir.path().join("arrays").join("problems");
        fs::create_dir_all(problems.join("two-sum")).unwrap();
        fs::create_dir_all(problems.join("three-sum")).unwrap();
        fs::write(problems.join("stray.txt"), "").unwrap();

        assert_eq!(
            find_problems(dir.path(), "arrays"),
            vec!["three-sum", "two-sum"]
        );
        assert!(find_problems(dir.path(), "graphs").is_empty());
    }

    #[test]
    fn test_attempts_sort_numerically() {
        let dir = TempDir::new().unwrap();
        let python = attempts_dir(dir.path(), "arrays", "two-sum", Language::Python);
        touch(&python.join("attempt_1.py"));
        touch(&python.join("attempt_2.py"));
        touch(&python.join("attempt_10.py"));

        let attempts = find_attempts(dir.path(), "arrays", "two-sum", Language::Python);
        assert_eq!(attempts, vec!["attempt_1", "attempt_2", "attempt_10"]);
        assert_eq!(
            latest_attempt(dir.path(), "arrays", "two-sum", Language::Python),
            Some("attempt_10".to_string())
        );
    }

    #[test]
    fn test_attempt_without_number_sorts_first() {
        let dir = TempDir::new().unwrap();
        let python = attempts_dir(dir.path(), "arrays", "two-sum", Language::Python);
        touch(&python.join("attempt_1.py"));
        touch(&python.join("solution.py"));

        let attempts = find_attempts(dir.path(), "arrays", "two-sum", Language::Python);
        assert_eq!(attempts, vec!["solution", "attempt_1"]);
    }

    #[test]
    fn test_attempts_filter_by_extension() {
        let dir = TempDir::new().unwrap();
        let java = attempts_dir(dir.path(), "arrays", "two-sum", Language::Java);
        touch(&java.join("attempt_1.java"));
        touch(&java.join("attempt_2.py"));
        touch(&java.join("notes.txt"));

        let attempts = find_attempts(dir.path(), "arrays", "two-sum", Language::Java);
        assert_eq!(attempts, vec!["attempt_1"]);
    }

    #[test]
    fn test_attempts_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(find_attempts(dir.path(), "arrays", "two-sum", Language::Python).is_empty());
        assert_eq!(
            latest_attempt(dir.path(), "arrays", "two-sum", Language::Python),
            None
        );
    }
}
