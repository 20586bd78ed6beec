use serde::{Deserialize, Serialize};
use std::fmt;

/// The four delivery platforms the catalog aggregates. Closed set: new
/// platforms are a code change, not data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Zomato,
    Swiggy,
    UberEats,
    Foodpanda,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Zomato,
        Platform::Swiggy,
        Platform::UberEats,
        Platform::Foodpanda,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Zomato => "Zomato",
            Platform::Swiggy => "Swiggy",
            Platform::UberEats => "Uber Eats",
            Platform::Foodpanda => "Foodpanda",
        }
    }

    /// Case-insensitive lookup from user input.
    pub fn parse(input: &str) -> Option<Platform> {
        match input.trim().to_lowercase().as_str() {
            "zomato" => Some(Platform::Zomato),
            "swiggy" => Some(Platform::Swiggy),
            "ubereats" | "uber eats" => Some(Platform::UberEats),
            "foodpanda" => Some(Platform::Foodpanda),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
