//! Category input validation and normalization.

use serde::Deserialize;

use crate::error::CoreError;

/// Maximum category name length in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// Color assigned when the caller sends none.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// Request payload for creating or replacing a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryInput {
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}

/// A validated, normalized category ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

/// Validate `input` and normalize it: trimmed name, `#`-prefixed color.
pub fn prepare_category(input: &CategoryInput) -> Result<CategoryDraft, CoreError> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("category name is required".into()));
    }
    if name.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "category name cannot exceed {MAX_CATEGORY_NAME_LENGTH} characters"
        )));
    }

    let color = normalize_color(input.color.as_deref().unwrap_or(""));
    validate_color_hex(&color)?;

    Ok(CategoryDraft {
        name: name.to_string(),
        color,
    })
}

/// Trim, prefix a missing `#`, and fall back to the default color when empty.
pub fn normalize_color(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY_COLOR.to_string()
    } else if trimmed.starts_with('#') {
        trimmed.to_string()
    } else {
        format!("#{trimmed}")
    }
}

/// Validate that a color string matches `#RRGGBB` (hex digits in either case).
pub fn validate_color_hex(color: &str) -> Result<(), CoreError> {
    let hex_part = match color.strip_prefix('#') {
        Some(rest) if rest.len() == 6 => rest,
        _ => {
            return Err(CoreError::Validation(format!(
                "invalid color format '{color}', must be a valid hex color (e.g., #FF0000)"
            )))
        }
    };

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CoreError::Validation(format!(
            "invalid color format '{color}', must contain only hex digits after '#'"
        )));
    }

    Ok(())
}
