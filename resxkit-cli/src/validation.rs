use std::path::Path;

/// Paths a command is about to touch, checked before any file is read.
#[derive(Debug, Default)]
pub struct ValidationContext {
    pub input_files: Vec<String>,
    pub output_file: Option<String>,
    pub output_dir: Option<String>,
    pub entry_name: Option<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_file(mut self, file: String) -> Self {
        self.input_files.push(file);
        self
    }

    pub fn with_input_files(mut self, files: &[String]) -> Self {
        self.input_files.extend(files.iter().cloned());
        self
    }

    pub fn with_output_file(mut self, file: String) -> Self {
        self.output_file = Some(file);
        self
    }

    pub fn with_output_dir(mut self, dir: String) -> Self {
        self.output_dir = Some(dir);
        self
    }

    pub fn with_entry_name(mut self, name: String) -> Self {
        self.entry_name = Some(name);
        self
    }
}

/// Validate file path exists and is readable
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

/// Validate output directory exists or can be created
pub fn validate_output_path(path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create output directory: {}", e))?;
        }
    }
    Ok(())
}

/// Validate `path` is a directory, creating it when missing.
pub fn validate_output_dir(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);
    if path_obj.exists() {
        if !path_obj.is_dir() {
            return Err(format!("Output path is not a directory: {}", path));
        }
        return Ok(());
    }
    std::fs::create_dir_all(path_obj).map_err(|e| format!("Cannot create output directory: {}", e))
}

pub fn validate_entry_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Entry name cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a complete validation context
pub fn validate_context(context: &ValidationContext) -> Result<(), String> {
    if context.input_files.is_empty() {
        return Err("At least one input file is required".to_string());
    }

    for (i, input) in context.input_files.iter().enumerate() {
        validate_file_path(input)
            .map_err(|e| format!("Input file {} validation failed: {}", i + 1, e))?;
    }

    if let Some(ref output) = context.output_file {
        validate_output_path(output).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    if let Some(ref dir) = context.output_dir {
        validate_output_dir(dir).map_err(|e| format!("Output validation failed: {}", e))?;
    }

    if let Some(ref name) = context.entry_name {
        validate_entry_name(name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_file() {
        let err = validate_file_path("/no/such/Resources.resx").unwrap_err();
        assert!(err.contains("File does not exist"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let err = validate_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("Path is not a file"));
    }

    #[test]
    fn test_output_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("out").join("resx");
        validate_output_dir(nested.to_str().unwrap()).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_context_requires_inputs() {
        let err = validate_context(&ValidationContext::new()).unwrap_err();
        assert_eq!(err, "At least one input file is required");
    }

    #[test]
    fn test_context_reports_input_position() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("Resources.resx");
        std::fs::write(&present, "<root/>").unwrap();

        let context = ValidationContext::new()
            .with_input_file(present.display().to_string())
            .with_input_file("missing.resx".to_string());
        let err = validate_context(&context).unwrap_err();
        assert!(err.starts_with("Input file 2 validation failed"));
    }

    #[test]
    fn test_blank_entry_name() {
        assert!(validate_entry_name("  ").is_err());
        assert!(validate_entry_name("Greeting").is_ok());
    }
}
