pub mod motor;
pub mod rocket;
