//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders always start `pending` with every item unavailable, whatever the payload says.
//! Actions enforce, in this order: the session owns the order's shop, then the lifecycle
//! rules. A failing action leaves the stored order untouched.

use super::{OrderAction, OrderError};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Session};
use async_trait::async_trait;

impl Order {
    fn authorize(&self, session: &Session) -> Result<(), OrderError> {
        if session.is_owner() && session.phone == self.shop_phone.as_str() {
            Ok(())
        } else {
            Err(OrderError::Unauthorized(format!(
                "{} does not own shop {}",
                session.phone, self.shop_phone
            )))
        }
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() {
            return Err(OrderError::Validation("order has no items".to_string()));
        }
        let items = params
            .items
            .into_iter()
            .map(|mut item| {
                item.available = false;
                item
            })
            .collect();
        Ok(Self {
            id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            shop_phone: params.shop_phone,
            shop_name: params.shop_name,
            items,
            list_type: params.list_type,
            status: OrderStatus::Pending,
            created_at: params.created_at,
        })
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Transition`: follows `pending → accepted | rejected`, `accepted → completed`
    /// - `SetItemAvailability`: flips one item flag while `accepted`
    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<Order, OrderError> {
        match action {
            OrderAction::Transition { by, to } => {
                self.authorize(&by)?;
                if !self.status.can_transition_to(to) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to,
                    });
                }
                self.status = to;
            }
            OrderAction::SetItemAvailability {
                by,
                index,
                available,
            } => {
                self.authorize(&by)?;
                if self.status != OrderStatus::Accepted {
                    return Err(OrderError::ItemsLocked {
                        status: self.status,
                    });
                }
                let len = self.items.len();
                let item = self
                    .items
                    .get_mut(index)
                    .ok_or(OrderError::ItemIndex { index, len })?;
                item.available = available;
            }
        }
        Ok(self.clone())
    }
}
