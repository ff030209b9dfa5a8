use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Template not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid templates directory: {0}")]
    InvalidTemplatesDir(String),
}

const TEMPLATE_EXTENSIONS: &[&str] = &["html", "liquid"];

/// Read a template file and return its content
pub fn read_template(relative_path: &RelativePath, templates_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(templates_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write template content to disk
pub fn write_template(
    relative_path: &RelativePath,
    templates_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(templates_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for template files (.html and .liquid) in the templates directory
pub fn scan_template_files(templates_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !templates_root.exists() {
        return Err(IoError::InvalidTemplatesDir(
            "templates directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(templates_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && TEMPLATE_EXTENSIONS.iter().any(|e| ext == *e)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_templates_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidTemplatesDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
