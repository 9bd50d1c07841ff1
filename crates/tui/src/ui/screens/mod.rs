pub mod budget;
pub mod login;
