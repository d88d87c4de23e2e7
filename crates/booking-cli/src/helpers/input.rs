//! Interactive prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Prompt for a required text field, re-asking until it is non-blank.
pub fn prompt_required(label: &str) -> anyhow::Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
