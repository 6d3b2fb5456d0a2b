use crate::catalog::Catalog;
use crate::error::{BedsideError, Result};
use crate::types::responses::ResponseSet;
use std::path::Path;

/// Loads a responses file, picking the parser by extension. TOML is the
/// hand-edited form produced by `init`; JSON is accepted for tooling.
pub fn load_responses(path: &Path) -> Result<ResponseSet> {
    if !path.exists() {
        return Err(BedsideError::ResponsesNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(toml::from_str(&content)?),
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => Err(BedsideError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Writes a blank answer template for the whole catalog: every answer 0,
/// each question echoed as a comment above its category's array. Overwriting
/// an existing file requires `force`, which is the retake path: the old
/// responses are discarded wholesale.
pub fn write_template(catalog: &Catalog, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(BedsideError::TemplateExists(path.display().to_string()));
    }

    let mut output = String::new();
    output.push_str("# Answers are option indexes, one per question in order.\n");
    output.push_str("# 0 selects the first option listed, 4 the last.\n");
    output.push_str("# Run `bedside questions` for the full option labels.\n\n");
    for category in &catalog.categories {
        for question in &category.questions {
            output.push_str(&format!("# {}\n", question.text));
        }
        let zeros = vec!["0"; category.questions.len()].join(", ");
        output.push_str(&format!("\"{}\" = [{}]\n\n", category.name, zeros));
    }

    std::fs::write(path, output)?;
    Ok(())
}
