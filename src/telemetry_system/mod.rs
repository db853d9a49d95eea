pub mod reducer;
pub mod sample;
