pub mod catalog;
pub mod comparison;
pub mod filters;
pub mod geolocation;
pub mod location;
pub mod platform;
