pub mod addresses;
pub mod docs;
pub mod health;
pub mod societies;
