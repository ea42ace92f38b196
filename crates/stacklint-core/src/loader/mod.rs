//! Turns HCL source into [`Document`]s.
//!
//! Files in a directory are merged in file-name order, with override files
//! (`override.tf`, `*_override.tf`) merged after every primary file.

mod blocks;
mod references;
mod values;

pub use blocks::BlockError;
pub use references::ReferenceCollector;

use std::fs;
use std::path::Path;

use hcl_edit::structure::Body;

use crate::document::Document;
use crate::error::ParseError;
use crate::rules::is_lintable;

/// Parses configuration text. `origin` names the source in error messages.
pub fn parse_str(source: &str, origin: &str) -> Result<Document, ParseError> {
    let body: Body = source.parse().map_err(|error: hcl_edit::parser::Error| {
        ParseError::File {
            path: origin.to_string(),
            message: error.to_string(),
            cause: Some(Box::new(error)),
        }
    })?;
    blocks::decode_body(&body).map_err(|error| ParseError::File {
        path: origin.to_string(),
        message: error.to_string(),
        cause: Some(Box::new(error)),
    })
}

pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let origin = path.display().to_string();
    let source = fs::read_to_string(path)
        .map_err(|cause| ParseError::Io { path: origin.clone(), cause })?;
    parse_str(&source, &origin)
}

/// Parses and merges every `.tf` file directly inside `dir`.
pub fn parse_directory(dir: &Path) -> Result<Document, ParseError> {
    let origin = dir.display().to_string();
    let wrap = |error: ParseError| ParseError::Directory {
        path: origin.clone(),
        message: error.to_string(),
        cause: Some(Box::new(error)),
    };

    let mut files = stack_files(dir)
        .map_err(|cause| wrap(ParseError::Io { path: origin.clone(), cause }))?;
    files.sort_by(|a, b| (is_override(a), a).cmp(&(is_override(b), b)));

    let mut doc = Document::new();
    for file in files {
        doc.merge(parse_file(&dir.join(&file)).map_err(wrap)?);
    }
    Ok(doc)
}

fn stack_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_dir = entry.file_type()?.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_lintable(&name, is_dir) {
            files.push(name);
        }
    }
    Ok(files)
}

fn is_override(file_name: &str) -> bool {
    let stem = file_name.strip_suffix(".tf").unwrap_or(file_name);
    stem == "override" || stem.ends_with("_override")
}
