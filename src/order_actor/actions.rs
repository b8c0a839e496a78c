//! Custom actions for the Order actor.
//!
//! Every mutation of an existing order is one of these actions. Each runs as a single step
//! of the actor loop, so two updates to the same order never interleave.

use crate::model::{OrderStatus, Session};

/// Owner-driven mutations of an [`Order`](crate::model::Order).
///
/// Both variants carry the acting session; the entity checks that it belongs to the owner
/// of the order's shop.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order along the lifecycle graph.
    Transition { by: Session, to: OrderStatus },
    /// Sets the availability flag of one item.
    ///
    /// # Errors
    /// Fails unless the order is `accepted` and `index` is in range.
    SetItemAvailability {
        by: Session,
        index: usize,
        available: bool,
    },
}
