//! Saves rendered proposals as standalone HTML files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use time::{macros::format_description, Date, OffsetDateTime};
use tracing::info;

use crate::util::format::slugify;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no documents or data directory available")]
    NoTargetDir,
    #[error("failed to format export date: {0}")]
    Date(#[from] time::error::Format),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Documents folder when the platform has one, else the local data dir.
fn export_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(|| dirs::data_local_dir().map(|dir| dir.join("tint-quote-builder")))
}

pub fn proposal_file_name(project_name: &str, date: Date) -> Result<String, ExportError> {
    let stamp = date.format(format_description!("[year]-[month]-[day]"))?;
    Ok(format!("proposal-{}-{stamp}.html", slugify(project_name)))
}

/// Writes the proposal into the export directory and returns its path.
pub fn export_proposal(project_name: &str, html: &str) -> Result<PathBuf, ExportError> {
    let dir = export_dir().ok_or(ExportError::NoTargetDir)?;
    let today = OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date();
    write_proposal(&dir, &proposal_file_name(project_name, today)?, html)
}

fn write_proposal(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, html)?;
    info!(path = %path.display(), "exported proposal");
    Ok(path)
}
