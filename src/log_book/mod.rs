pub mod flight;
pub mod weather;
