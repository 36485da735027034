// src/presentation/http/controllers/mod.rs
pub mod contact;
pub mod events;
pub mod news;
pub mod pages;
