pub mod articles;
pub mod events;
