pub mod shared;
pub mod system;
pub mod views;
