use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Validation context for the `convert` command
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub reference_locale: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_dir(mut self, dir: impl Into<String>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_reference_locale(mut self, lang: impl Into<String>) -> Self {
        self.reference_locale = Some(lang.into());
        self
    }
}

/// Validate file path exists and is a regular file
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate directory exists. Unlike output files, output directories are
/// never created on the fly.
pub fn validate_directory(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("Directory does not exist: {}", path));
    }

    if !path_obj.is_dir() {
        return Err(format!("Path is not a directory: {}", path));
    }

    Ok(())
}

/// Validate language code format using unic-langid
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    match lang.parse::<LanguageIdentifier>() {
        Ok(lang_id) => {
            // Locale files are named `xx-YY`, so a bare language is never a match
            if lang_id.region.is_none() {
                return Err(format!(
                    "Invalid reference locale: {}. Expected a language-region code such as en-US",
                    lang
                ));
            }
            Ok(())
        }
        Err(_) => Err(format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )),
    }
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if let Some(ref input) = context.input_dir {
        validate_directory(input).map_err(|e| format!("Input path validation failed: {}", e))?;
    }

    if let Some(ref output) = context.output_dir {
        validate_directory(output)
            .map_err(|e| format!("Output path validation failed: {}", e))?;
    }

    if let Some(ref lang) = context.reference_locale {
        validate_language_code(lang)
            .map_err(|e| format!("Reference locale validation failed: {}", e))?;
    }

    Ok(())
}
