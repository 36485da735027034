// src/domain/contact/mod.rs
use crate::domain::errors::{DomainError, DomainResult};

/// A validated message from the public contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, phone: Option<&str>, message: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(DomainError::Validation("message cannot be empty".into()));
        }
        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToOwned::to_owned);

        Ok(Self {
            name: name.to_owned(),
            phone,
            message: message.to_owned(),
        })
    }
}
