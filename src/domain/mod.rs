pub mod article;
pub mod contact;
pub mod errors;
pub mod event;
