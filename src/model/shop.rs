use crate::geo::{coordinate_text, Coordinates, Distance};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shop is keyed by its owner's phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(pub String);

impl ShopId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShopId {
    fn from(phone: &str) -> Self {
        Self(phone.to_string())
    }
}

impl From<String> for ShopId {
    fn from(phone: String) -> Self {
        Self(phone)
    }
}

/// What a shop sells. Decides which part of a shopping list it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShopCategory {
    #[serde(rename = "Vegetable Shop")]
    VegetableShop,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    Supermarket,
    Bakery,
    /// Unset or unrecognised category.
    #[default]
    #[serde(rename = "General Store", other)]
    General,
}

impl ShopCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ShopCategory::VegetableShop => "Vegetable Shop",
            ShopCategory::GroceryStore => "Grocery Store",
            ShopCategory::Supermarket => "Supermarket",
            ShopCategory::Bakery => "Bakery",
            ShopCategory::General => "General Store",
        }
    }
}

impl From<&str> for ShopCategory {
    fn from(label: &str) -> Self {
        match label {
            "Vegetable Shop" => ShopCategory::VegetableShop,
            "Grocery Store" => ShopCategory::GroceryStore,
            "Supermarket" => ShopCategory::Supermarket,
            "Bakery" => ShopCategory::Bakery,
            _ => ShopCategory::General,
        }
    }
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A registered shop.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`shop_actor::entity`](crate::shop_actor::entity). Shops are stored by upsert under
/// their phone number and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub phone: ShopId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: ShopCategory,
    /// Free-text address shown to customers.
    pub location: String,
    #[serde(default, with = "coordinate_text")]
    pub coordinates: Option<Coordinates>,
    pub owner_name: String,
}

/// The owner-editable part of a shop.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopProfile {
    pub name: String,
    pub category: ShopCategory,
    pub location: String,
    pub coordinates: Option<Coordinates>,
}

impl ShopProfile {
    pub fn new(name: impl Into<String>, category: ShopCategory, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            location: location.into(),
            coordinates: None,
        }
    }

    /// Sets coordinates from geocoder text. Text that does not parse leaves them unset.
    pub fn with_coordinates_text(mut self, text: &str) -> Self {
        self.coordinates = text.parse().ok();
        self
    }

    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Payload for registering (creating or overwriting) a shop.
#[derive(Debug, Clone)]
pub struct ShopCreate {
    pub profile: ShopProfile,
    pub owner_name: String,
}

/// A shop annotated with its distance from the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyShop {
    pub shop: Shop,
    pub distance: Distance,
}

impl NearbyShop {
    /// `"450 m"`, `"3.3 km"` or `"Unknown"`.
    pub fn label(&self) -> String {
        self.distance.label()
    }

    /// Annotates `shops` with their distance from `origin` and sorts them nearest first.
    ///
    /// Shops without coordinates, or every shop when `origin` is absent, sort last. Ties
    /// keep the order of `shops`.
    pub fn rank(shops: Vec<Shop>, origin: Option<&Coordinates>) -> Vec<NearbyShop> {
        let mut ranked: Vec<NearbyShop> = shops
            .into_iter()
            .map(|shop| {
                let distance = Distance::between(origin, shop.coordinates.as_ref());
                NearbyShop { shop, distance }
            })
            .collect();
        ranked.sort_by(|a, b| a.distance.sort_key().total_cmp(&b.distance.sort_key()));
        ranked
    }
}
