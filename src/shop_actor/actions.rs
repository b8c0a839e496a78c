//! Custom actions for the Shop actor.

/// Shops have no custom actions: every change is a re-registration (upsert).
///
/// The enum has no variants, so `perform_action` can never be called for a shop.
#[derive(Debug, Clone)]
pub enum ShopAction {}
