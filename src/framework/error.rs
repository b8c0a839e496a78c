//! # Framework Errors
//!
//! Common error types used throughout the actor framework. Entity-specific failures travel
//! inside [`FrameworkError::EntityError`] and are recovered by the domain clients with
//! [`FrameworkError::downcast_entity`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor has no id generator configured")]
    NoIdGenerator,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Any other variant, or an entity error of a different type, is handed back unchanged.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }

    /// `true` when the actor behind the client could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("boom")]
    struct Boom;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(Boom));
        assert_eq!(err.downcast_entity::<Boom>().unwrap(), Boom);
    }

    #[test]
    fn downcast_leaves_other_variants_alone() {
        let err = FrameworkError::ActorClosed.downcast_entity::<Boom>().unwrap_err();
        assert!(err.is_unreachable());

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("io")));
        let err = foreign.downcast_entity::<Boom>().unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
    }
}
