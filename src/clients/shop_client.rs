//! # Shop Client
//!
//! High-level API over the Shop actor: owner registration, point reads and the
//! "nearby shops" listing shown to customers.
use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient};
use crate::geo::Coordinates;
use crate::model::{NearbyShop, Session, Shop, ShopCreate, ShopId, ShopProfile};
use crate::shop_actor::ShopError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Shop actor.
#[derive(Clone)]
pub struct ShopClient {
    inner: ResourceClient<Shop>,
}

impl ShopClient {
    pub fn new(inner: ResourceClient<Shop>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Shop> for ShopClient {
    type Error = ShopError;

    fn inner(&self) -> &ResourceClient<Shop> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ShopError::NotFound(id),
            e if e.is_unreachable() => ShopError::Retrieval(e.to_string()),
            e => e
                .downcast_entity::<ShopError>()
                .unwrap_or_else(|e| ShopError::Retrieval(e.to_string())),
        }
    }
}

impl ShopClient {
    /// Creates or overwrites the shop owned by `session`, keyed by the session's phone.
    ///
    /// Every field is replaced, so a profile without coordinates clears stored ones.
    #[instrument(skip(self, session, profile), fields(phone = %session.phone))]
    pub async fn register_shop(&self, session: &Session, profile: ShopProfile) -> Result<Shop, ShopError> {
        if !session.is_owner() {
            return Err(ShopError::Unauthorized(format!(
                "{} is not a shop owner",
                session.phone
            )));
        }
        debug!(?profile, "register_shop called");

        let params = ShopCreate {
            profile,
            owner_name: session.name.clone(),
        };
        let shop = self
            .inner
            .upsert(ShopId::from(session.phone.as_str()), params)
            .await
            .map_err(Self::map_error)?;
        info!(name = %shop.name, category = %shop.category, "Shop registered");
        Ok(shop)
    }

    /// Fetches a shop, failing with [`ShopError::NotFound`] when none is registered.
    #[instrument(skip(self))]
    pub async fn shop(&self, id: &ShopId) -> Result<Shop, ShopError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| ShopError::NotFound(id.to_string()))
    }

    /// Every registered shop, in registration order.
    #[instrument(skip(self))]
    pub async fn list_shops(&self) -> Result<Vec<Shop>, ShopError> {
        debug!("Sending request");
        self.inner.list(Query::all()).await.map_err(Self::map_error)
    }

    /// All shops annotated with their distance from `origin`, nearest first.
    ///
    /// `origin` is geocoder text (`"lat, lon"`). When it is absent or does not parse, every
    /// shop is labelled `"Unknown"` and registration order is kept. An empty result means no
    /// shops are registered.
    #[instrument(skip(self))]
    pub async fn list_shops_near(&self, origin: Option<&str>) -> Result<Vec<NearbyShop>, ShopError> {
        let origin = origin.and_then(|text| text.parse::<Coordinates>().ok());
        self.list_shops_near_point(origin).await
    }

    /// Like [`list_shops_near`](Self::list_shops_near) for an already parsed point.
    pub async fn list_shops_near_point(&self, origin: Option<Coordinates>) -> Result<Vec<NearbyShop>, ShopError> {
        let shops = self.list_shops().await?;
        let ranked = NearbyShop::rank(shops, origin.as_ref());
        debug!(count = ranked.len(), "Ranked shops");
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_list, MockClient};
    use crate::model::ShopCategory;

    fn shop(phone: &str, coordinates: &str) -> Shop {
        Shop {
            phone: ShopId::from(phone),
            name: format!("Shop {phone}"),
            category: ShopCategory::Supermarket,
            location: String::new(),
            coordinates: coordinates.parse().ok(),
            owner_name: "Owner".to_string(),
        }
    }

    #[tokio::test]
    async fn customers_cannot_register_shops() {
        // No expectations: the request must never reach the actor.
        let mock = MockClient::<Shop>::new();
        let client = ShopClient::new(mock.client());

        let err = client
            .register_shop(
                &Session::customer("Asha", "111"),
                ShopProfile::new("Corner", ShopCategory::Bakery, ""),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::Unauthorized(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn missing_shop_is_not_found() {
        let mut mock = MockClient::<Shop>::new();
        mock.expect_get(ShopId::from("404")).return_ok(None);
        let client = ShopClient::new(mock.client());

        let err = client.shop(&ShopId::from("404")).await.unwrap_err();
        assert_eq!(err, ShopError::NotFound("404".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn unreachable_directory_is_a_retrieval_error() {
        let mut mock = MockClient::<Shop>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let client = ShopClient::new(mock.client());

        let err = client.list_shops_near(Some("18.52, 73.85")).await.unwrap_err();
        assert!(matches!(err, ShopError::Retrieval(_)));
    }

    #[tokio::test]
    async fn nearby_listing_sorts_the_directory_snapshot() {
        let (inner, mut receiver) = create_mock_client::<Shop>(4);
        let client = ShopClient::new(inner);

        let listing = tokio::spawn(async move { client.list_shops_near(Some("18.52, 73.85")).await });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        let directory = vec![shop("far", "18.60, 73.85"), shop("nowhere", ""), shop("near", "18.521, 73.85")];
        responder.send(Ok(query.evaluate(directory.iter()))).unwrap();

        let ranked = listing.await.unwrap().unwrap();
        let phones: Vec<&str> = ranked.iter().map(|s| s.shop.phone.as_str()).collect();
        assert_eq!(phones, vec!["near", "far", "nowhere"]);
        assert_eq!(ranked[0].label(), "111 m");
        assert_eq!(ranked[1].label(), "8.9 km");
        assert_eq!(ranked[2].label(), "Unknown");
    }
}
