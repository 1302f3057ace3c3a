use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Language;

pub struct CreatedProblem {
    pub category: String,
    pub problem: String,
    pub location: PathBuf,
}

/// Lowercase-hyphenated form used for category and problem directories.
pub fn normalize_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Human-readable title for a slug: hyphens become spaces, each word
/// capitalized ("two-sum" -> "Two Sum").
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create the directory tree and template files for one problem.
/// Directory creation is idempotent; the two template files are written
/// unconditionally, so re-running resets hand edits.
pub fn create_problem(root: &Path, category: &str, problem: &str) -> Result<CreatedProblem, String> {
    let category = normalize_slug(category);
    let problem = normalize_slug(problem);

    let base = root.join(&category).join("problems").join(&problem);

    for language in [Language::Python, Language::Java] {
        let attempts = base.join("attempts").join(language.dir_name());
        fs::create_dir_all(&attempts)
            .map_err(|e| format!("Failed to create directory {}: {}", attempts.display(), e))?;
    }

    let title = title_from_slug(&problem);

    let readme = base.join("README.md");
    fs::write(&readme, readme_template(&title))
        .map_err(|e| format!("Failed to write {}: {}", readme.display(), e))?;

    let reflection = base.join("reflection.md");
    fs::write(&reflection, reflection_template(&title))
        .map_err(|e| format!("Failed to write {}: {}", reflection.display(), e))?;

    Ok(CreatedProblem {
        category,
        problem,
        location: base,
    })
}

fn readme_template(title: &str) -> String {
    format!(
        r#"# {title}

## Problem Link
[Add problem link here]

## Description
[Add problem description here]

## Examples

### Example 1:
```
Input:
Output:
Explanation:
```

## Constraints
- [Add constraints here]

## Tags
- [Tag 1]
- [Tag 2]

## Difficulty
[Easy/Medium/Hard]

## Notes
- First attempt: [Date]
- Last revision: [Date]
- Total attempts: 0
"#,
        title = title
    )
}

fn reflection_template(title: &str) -> String {
    format!(
        r#"# Reflection: {title}

## Problem Link
[Add problem link here]

## My Approach

### First Attempt
**Date:** [Date]
**Status:** Not Started

**Approach:**
- [Describe your initial thought process]

### Final Solution Approach

**Strategy:**
[Describe the approach you used in your final solution]

**Key Insights:**
1. [Insight 1]

## Time Complexity
**O([complexity])**

**Explanation:**
[Explain why this is the time complexity]

## Space Complexity
**O([complexity])**

**Explanation:**
[Explain why this is the space complexity]

## Edge Cases Considered
1. [Edge case 1]

## Key Learnings
1. [Learning point 1]

## Revision Notes
- [Date]: [Notes about revision attempt]
"#,
        title = title
    )
}
