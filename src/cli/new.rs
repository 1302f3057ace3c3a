use std::env;

use crate::models::manifest;
use crate::scaffold;

pub fn new_problem(category: &str, problem: &str) {
    let current_dir = env::current_dir().unwrap_or_else(|e| {
        eprintln!("Failed to get current directory: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = manifest::ensure(&current_dir) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let created = match scaffold::create_problem(&current_dir, category, problem) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create problem structure: {}", e);
            std::process::exit(1);
        }
    };

    println!("[OK] Created problem structure for: {}", created.problem);
    println!("Category: {}", created.category);
    println!("Location: {}", created.location.display());
    println!();
    println!("Next steps:");
    println!("1. Fill in the README.md with problem details");
    println!(
        "2. Implement your solution in attempts/python/attempt_1.py and attempts/java/attempt_1.java"
    );
    println!("3. Update reflection.md after solving");
}
