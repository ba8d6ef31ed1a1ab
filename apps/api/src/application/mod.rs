pub mod get_society;
pub mod parse_address;
pub mod parse_batch;
