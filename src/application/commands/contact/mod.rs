// src/application/commands/contact/mod.rs
mod service;
mod submit;

pub use service::ContactCommandService;
pub use submit::SubmitContactCommand;
