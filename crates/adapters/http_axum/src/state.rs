//! Shared application state for axum handlers.

use std::sync::Arc;

use catpoint_app::event_bus::StatusEventBus;
use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and classifier types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R, C> {
    /// The alarm state machine.
    pub security_service: Arc<SecurityService<R, C>>,
    /// Broadcast bus feeding the SSE stream.
    pub event_bus: Arc<StatusEventBus>,
}

impl<R, C> Clone for AppState<R, C> {
    fn clone(&self) -> Self {
        Self {
            security_service: Arc::clone(&self.security_service),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    /// Create a new application state, registering `event_bus` as a status
    /// listener on the service.
    pub fn new(security_service: SecurityService<R, C>, event_bus: Arc<StatusEventBus>) -> Self {
        security_service.add_status_listener(event_bus.clone());
        Self {
            security_service: Arc::new(security_service),
            event_bus,
        }
    }

    /// Create a new application state from a pre-wrapped service.
    ///
    /// The caller is responsible for registering `event_bus` on the service.
    pub fn from_arcs(
        security_service: Arc<SecurityService<R, C>>,
        event_bus: Arc<StatusEventBus>,
    ) -> Self {
        Self {
            security_service,
            event_bus,
        }
    }
}
