use std::io::{self, Write};
use std::path::Path;

use crate::discover;
use crate::models::Language;
use crate::runner;

pub(super) fn run_menu(root: &Path) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("DSA Test Runner");
    println!("{}", line);
    println!("\nSelect an option:");
    println!("1. Test Python solution");
    println!("2. Test Java solution");
    println!("0. Exit");

    let choice = match read_line("\nEnter your choice (0-2): ") {
        Some(input) => input,
        None => return,
    };
    let language = match choice.as_str() {
        "0" => {
            println!("Exiting...");
            return;
        }
        "1" => Language::Python,
        "2" => Language::Java,
        _ => {
            println!("Invalid choice. Please select 1 or 2.");
            return;
        }
    };

    let categories = discover::find_categories(root);
    if categories.is_empty() {
        println!("No categories found. Make sure you're in the repository root.");
        return;
    }
    println!("\nAvailable categories:");
    let category = match choose(&categories, "category") {
        Some(c) => c,
        None => return,
    };

    let problems = discover::find_problems(root, category);
    if problems.is_empty() {
        println!("No problems found in category '{}'.", category);
        return;
    }
    println!("\nAvailable problems in '{}':", category);
    let problem = match choose(&problems, "problem") {
        Some(p) => p,
        None => return,
    };

    let attempts = discover::find_attempts(root, category, problem, language);
    if attempts.is_empty() {
        println!(
            "No {} attempts found for problem '{}'.",
            language.dir_name(),
            problem
        );
        return;
    }
    println!("\nAvailable {} attempts:", language.dir_name());
    let attempt = match choose(&attempts, "attempt") {
        Some(a) => a,
        None => return,
    };

    if let Err(e) = runner::run_attempt(root, category, problem, attempt, language) {
        eprintln!("Error: {}", e);
    }
}

/// Print a numbered list and read one selection. Any invalid entry
/// aborts the whole run.
fn choose<'a>(items: &'a [String], what: &str) -> Option<&'a String> {
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }

    let input = read_line(&format!("\nSelect {} (1-{}): ", what, items.len()))?;
    let index: usize = match input.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Invalid input. Please enter a number.");
            return None;
        }
    };

    if index < 1 || index > items.len() {
        println!("Invalid {} selection.", what);
        return None;
    }

    Some(&items[index - 1])
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}
