//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use catpoint_app::ports::{EventPublisher, ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, classifier and event publisher to avoid
/// dynamic dispatch. The service sits behind a [`Mutex`]: requests may arrive
/// concurrently, but each one reads, decides and writes the security state
/// alone. `Clone` is implemented manually so the underlying types themselves
/// do not need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R, C, P> {
    /// Security service guarded for exclusive use per request.
    pub security: Arc<Mutex<SecurityService<R, C, P>>>,
}

impl<R, C, P> Clone for AppState<R, C, P> {
    fn clone(&self) -> Self {
        Self {
            security: Arc::clone(&self.security),
        }
    }
}

impl<R, C, P> AppState<R, C, P>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a new application state owning the service.
    pub fn new(security: SecurityService<R, C, P>) -> Self {
        Self {
            security: Arc::new(Mutex::new(security)),
        }
    }
}
