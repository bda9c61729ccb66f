pub mod email;
pub mod names;
