use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

lazy_static! {
    static ref DISALLOWED_PROMPT_CHARS: Regex = Regex::new(r"[^a-zA-Z0-9 ]").unwrap();
}

pub const DEFAULT_STYLE: &str = "3D Avatar";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateAvatarDto {
    #[serde(default)]
    #[validate(custom = "validate_prompt")]
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
}

impl GenerateAvatarDto {
    pub fn sanitized(&self) -> Self {
        Self {
            prompt: sanitize_prompt(&self.prompt),
            style: self.style.to_string(),
        }
    }

    /// Prompt forwarded to the generation vendor.
    pub fn upstream_prompt(&self) -> String {
        let dto = self.sanitized();
        format!("{} avatar of {}", dto.style, dto.prompt)
    }
}

/// Drops every character that is not an ASCII letter, digit or space.
pub fn sanitize_prompt(prompt: &str) -> String {
    DISALLOWED_PROMPT_CHARS.replace_all(prompt, "").into_owned()
}

fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::from("Prompt is required"));
        return Err(error);
    }

    Ok(())
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}
