use super::api;
use crate::shared::config::app_config;
use contracts::system::notifications::{NotificationFeed, UpcomingDueDate};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Owner of the upcoming due-date list.
///
/// Provided once in `App`. Screens read `feed` and may call `fetch()` after a
/// write; nothing else mutates the list.
#[derive(Clone, Copy)]
pub struct NotificationStore {
    pub feed: RwSignal<NotificationFeed<UpcomingDueDate>>,
    /// Bumped on every start/stop; a poll loop exits once its value is stale.
    generation: StoredValue<u64>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(NotificationFeed::default()),
            generation: StoredValue::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.feed.with(|f| f.count())
    }

    pub fn is_loading(&self) -> bool {
        self.feed.with(|f| f.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.feed.with(|f| f.error.clone())
    }

    /// Re-fetches in the background.
    pub fn fetch(&self) {
        let this = *self;
        spawn_local(async move { this.refresh().await });
    }

    async fn refresh(self) {
        self.feed.update(|f| f.begin());
        let result = api::fetch_upcoming().await;
        if let Err(e) = &result {
            log::warn!("refreshing upcoming due dates: {e}");
        }
        // the store outlives every screen; try_ guards app teardown
        self.feed.try_update(|f| f.finish(result));
    }

    /// Fetches now, then every `notifications.poll_interval_secs`.
    pub fn start_polling(&self) {
        let this = *self;
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        let interval_ms =
            u32::try_from(app_config().poll_interval().as_millis()).unwrap_or(u32::MAX);

        spawn_local(async move {
            loop {
                if this.generation.try_get_value() != Some(generation) {
                    break;
                }
                this.refresh().await;
                TimeoutFuture::new(interval_ms).await;
            }
            log::debug!("notification polling stopped");
        });
    }

    pub fn stop_polling(&self) {
        self.generation
            .try_update_value(|generation| *generation += 1);
    }
}
