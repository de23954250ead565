pub mod diagnosis;
pub mod translation;
