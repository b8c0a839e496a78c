use serde::{Deserialize, Serialize};

/// Which side of the marketplace a session acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Owner,
}

/// The signed-in user, passed explicitly into every controller entry point.
///
/// For an owner, `phone` is also the id of their shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub phone: String,
    pub role: Role,
}

impl Session {
    pub fn customer(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            role: Role::Customer,
        }
    }

    pub fn owner(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            role: Role::Owner,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}
