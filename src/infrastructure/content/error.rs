use crate::domain::errors::DomainError;
use std::{io, path::Path};

pub fn map_io(path: &Path, err: &io::Error) -> DomainError {
    match err.kind() {
        io::ErrorKind::NotFound => DomainError::NotFound(path.display().to_string()),
        io::ErrorKind::InvalidData => {
            DomainError::Malformed(format!("{}: {err}", path.display()))
        }
        _ => DomainError::Io(format!("{}: {err}", path.display())),
    }
}
