//! Menu change stream (Server-Sent Events)

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::AppState;

pub const MENU_CHANGED_EVENT: &str = "menu_changed";

/// GET /api/v1/menu/events
///
/// Each event carries the revision, the change, and the full menu list.
pub async fn menu_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut rx = state.catalog.subscribe();
    info!("Menu event subscriber connected");

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    debug!("Forwarding menu revision {}", event.revision);
                    yield Ok(create_sse_event(MENU_CHANGED_EVENT, &event));
                }
                Err(RecvError::Lagged(skipped)) => {
                    // The next event still carries the full list
                    warn!("Menu event subscriber lagged, skipped {} event(s)", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
        info!("Menu event stream closed");
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

fn create_sse_event<T: serde::Serialize>(event_type: &str, data: &T) -> Event {
    Event::default()
        .event(event_type)
        .data(serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string()))
}
