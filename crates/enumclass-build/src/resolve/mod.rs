pub mod description;
pub mod member;
