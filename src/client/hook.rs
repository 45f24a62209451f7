//! Polling shared by every data page: fetch on mount, then again every interval
//! until the component unmounts.

use dioxus::prelude::*;

use crate::client::{component::Banner, model::cache::Cache};

#[cfg(feature = "web")]
use crate::client::model::error::ApiError;
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(feature = "web")]
use std::future::Future;

/// A polled resource and the handle to re-fetch it early.
pub struct Poll<T: 'static> {
    pub data: Signal<Cache<T>>,
    trigger: Signal<u32>,
}

impl<T: 'static> Clone for Poll<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Poll<T> {}

impl<T: 'static> Poll<T> {
    /// Restarts the loop, so the next fetch happens now instead of at the next tick.
    pub fn refresh(&mut self) {
        *self.trigger.write() += 1;
    }
}

/// Runs `fetch` immediately and then every `interval_ms`.
///
/// Failed fetches are logged and shown in `banner`; the last good value stays in
/// `data`. Signals read by `fetch` restart the loop when they change, which is how
/// a page follows its route parameters. The task lives in the component's scope,
/// so polling stops when the user navigates away.
#[cfg(feature = "web")]
pub fn use_poll<T, F, Fut>(interval_ms: u32, banner: Signal<Option<Banner>>, fetch: F) -> Poll<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = use_signal(Cache::<T>::default);
    let trigger = use_signal(|| 0u32);
    let fetch = std::rc::Rc::new(fetch);

    let _ = use_resource(move || {
        let fetch = fetch.clone();
        let mut data = data;
        let mut banner = banner;
        async move {
            let _ = trigger();
            loop {
                let result = fetch().await;
                if let Some(err) = data.write().apply(result) {
                    tracing::error!("Polling request failed: {}", err);
                    banner.set(Some(Banner::from_api_error(&err)));
                }
                gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            }
        }
    });

    Poll { data, trigger }
}

/// Server-rendered stand-in for [`use_poll`]: the page renders its loading state and
/// the client takes over after hydration.
#[cfg(not(feature = "web"))]
pub fn use_idle_poll<T: 'static>() -> Poll<T> {
    let data = use_signal(Cache::<T>::default);
    let trigger = use_signal(|| 0u32);

    Poll { data, trigger }
}
