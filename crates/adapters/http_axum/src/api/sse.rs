//! Server-Sent Events (SSE) stream for real-time status updates.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use catpoint_app::ports::{ImageClassifier, SecurityRepository};

use crate::state::AppState;

/// `GET /api/events/stream` — SSE stream of alarm and sensor changes.
///
/// Subscribes to the status event bus and sends JSON-encoded
/// [`StatusEvent`](catpoint_domain::event::StatusEvent)s as SSE `data:`
/// frames until the client disconnects.
pub async fn stream<R, C>(
    State(state): State<AppState<R, C>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    R: SecurityRepository + Send + Sync + 'static,
    C: ImageClassifier + Send + Sync + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize status event for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some events were dropped");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
