pub mod registry;
pub mod security;
