//! [`ActorEntity`] implementation for [`Shop`].
//!
//! Shops are caller-keyed: the actor has no id generator and every write is an upsert under
//! the owner's phone number. Re-registering overwrites the whole record, so clearing the
//! coordinates on the profile clears them in the store.

use super::{ShopAction, ShopError};
use crate::framework::ActorEntity;
use crate::model::{Shop, ShopCreate, ShopId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Shop {
    type Id = ShopId;
    type Create = ShopCreate;
    type Action = ShopAction;
    type ActionResult = ();
    type Context = ();
    type Error = ShopError;

    fn from_create_params(id: ShopId, params: ShopCreate) -> Result<Self, ShopError> {
        if id.as_str().trim().is_empty() {
            return Err(ShopError::Validation("shop phone is required".to_string()));
        }
        let profile = params.profile;
        if profile.name.trim().is_empty() {
            return Err(ShopError::Validation("shop name is required".to_string()));
        }
        Ok(Self {
            phone: id,
            name: profile.name,
            category: profile.category,
            location: profile.location,
            coordinates: profile.coordinates,
            owner_name: params.owner_name,
        })
    }

    async fn handle_action(&mut self, action: ShopAction, _ctx: &()) -> Result<(), ShopError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Query, ResourceActor};
    use crate::model::{ShopCategory, ShopProfile};

    #[test]
    fn builds_shop_from_registration() {
        let params = ShopCreate {
            profile: ShopProfile::new("Green Basket", ShopCategory::VegetableShop, "MG Road")
                .with_coordinates_text("18.5204, 73.8567"),
            owner_name: "Ravi".to_string(),
        };
        let shop = Shop::from_create_params(ShopId::from("9876543210"), params).unwrap();
        assert_eq!(shop.phone.as_str(), "9876543210");
        assert_eq!(shop.owner_name, "Ravi");
        assert!(shop.coordinates.is_some());
    }

    #[test]
    fn rejects_blank_phone_and_name() {
        let params = || ShopCreate {
            profile: ShopProfile::new("Green Basket", ShopCategory::Bakery, ""),
            owner_name: "Ravi".to_string(),
        };
        assert!(matches!(
            Shop::from_create_params(ShopId::from(" "), params()),
            Err(ShopError::Validation(_))
        ));

        let mut nameless = params();
        nameless.profile.name = String::new();
        assert!(matches!(
            Shop::from_create_params(ShopId::from("1"), nameless),
            Err(ShopError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn registration_is_the_only_way_to_change_a_shop() {
        // An uninhabited action type: no value can be built to send.
        fn unreachable_action(action: ShopAction) -> ! {
            match action {}
        }
        let _ = unreachable_action;

        let (actor, client) = ResourceActor::<Shop>::new(4);
        tokio::spawn(actor.run(()));
        let mut shops = client.subscribe(Query::all()).await.unwrap();
        assert!(shops.next().await.unwrap().is_empty());

        let params = ShopCreate {
            profile: ShopProfile::new("Green Basket", ShopCategory::VegetableShop, "MG Road"),
            owner_name: "Ravi".to_string(),
        };
        client.upsert(ShopId::from("555"), params).await.unwrap();
        assert_eq!(shops.next().await.unwrap().len(), 1);

        client.list(Query::all()).await.unwrap();
        assert!(shops.try_next().is_none());
    }
}
