pub mod address;
pub mod resolution;
pub mod society;
