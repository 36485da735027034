// src/application/ports/mod.rs
pub mod contact;
pub mod markdown;
