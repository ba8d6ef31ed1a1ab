pub mod entity;
pub mod errors;
pub mod parser;
pub mod value_objects;

pub use entity::{NOT_SERVICEABLE, ParsedAddress, ParsedAddressRecord};
pub use errors::DomainError;
pub use parser::AddressParser;
pub use value_objects::Coordinates;
