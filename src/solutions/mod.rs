pub mod y2015;
pub mod y2024;
pub mod y2025;
