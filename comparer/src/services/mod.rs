pub mod address;
pub mod geocode;
pub mod location;
pub mod store;
