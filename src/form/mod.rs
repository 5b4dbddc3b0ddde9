pub mod client;
pub mod controller;
pub mod phone;
pub mod validate;
