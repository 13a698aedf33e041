//! The deferred units of the resolution pipeline: [`ViewModule`] (the
//! renderable a page name resolves to) and [`ViewLoader`] (its asynchronous
//! producer).

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use leptos::prelude::AnyView;
use serde_json::Value;
use thiserror::Error;

/// Failure of a loader's asynchronous execution. Cloneable so it can sit in
/// reactive state and surface through an error boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to load view module '{path}': {reason}")]
pub struct ViewLoadError {
    pub path: String,
    pub reason: String,
}

/// The concrete renderable unit a page name resolves to: a render entry
/// point plus the conventional module path it is enumerated under.
///
/// Modules are plain data (a function pointer and a static path), immutable
/// once constructed and reused for the lifetime of the process. There is no
/// invalidation path.
#[derive(Clone, Copy)]
pub struct ViewModule {
    path: &'static str,
    render: fn(Value) -> AnyView,
}

impl ViewModule {
    pub const fn new(path: &'static str, render: fn(Value) -> AnyView) -> Self {
        Self { path, render }
    }

    /// The conventional module path, e.g. `views/sales/create/view`.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Renders the module with the visit's props bag.
    pub fn render(&self, props: Value) -> AnyView {
        (self.render)(props)
    }
}

impl PartialEq for ViewModule {
    fn eq(&self, other: &Self) -> bool {
        // Path is the module identity; render entry points are unique per path.
        self.path == other.path
    }
}

impl Eq for ViewModule {}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule").field("path", &self.path).finish()
    }
}

pub type LoadFuture = Pin<Box<dyn Future<Output = Result<ViewModule, ViewLoadError>>>>;

/// Deferred producer of a [`ViewModule`].
///
/// Cloning is cheap; clones share the underlying load operation. Callers
/// are expected to hold one stable loader per page, so re-renders of the
/// same logical page do not restart a load. The loader itself is shareable;
/// the futures it produces are not, and are awaited on the UI thread.
#[derive(Clone)]
pub struct ViewLoader {
    load: Arc<dyn Fn() -> LoadFuture + Send + Sync>,
}

impl ViewLoader {
    pub fn new(load: impl Fn() -> LoadFuture + Send + Sync + 'static) -> Self {
        Self {
            load: Arc::new(load),
        }
    }

    /// Loader for a module on the eager path: settles on the first poll.
    pub fn eager(module: ViewModule) -> Self {
        Self::new(move || Box::pin(std::future::ready(Ok(module))) as LoadFuture)
    }

    /// Loader for a scanner-enumerated module: suspends once before
    /// materializing, so a pending render pass paints its placeholder first.
    pub fn deferred(ctor: fn() -> ViewModule) -> Self {
        Self::new(move || {
            Box::pin(async move {
                YieldNow::default().await;
                Ok(ctor())
            }) as LoadFuture
        })
    }

    /// Starts the load. The returned future is awaited at a suspension
    /// point; it is never cancelled once started.
    pub fn load(&self) -> LoadFuture {
        (self.load)()
    }
}

impl fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ViewLoader")
    }
}

/// Pending exactly once, then ready. The suspension point of a deferred load.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::task::noop_waker;
    use leptos::prelude::IntoAny;

    pub(crate) fn blank_render(_props: Value) -> AnyView {
        ().into_any()
    }

    fn test_module() -> ViewModule {
        ViewModule::new("views/test/view", blank_render)
    }

    #[test]
    fn eager_loader_settles_on_the_first_poll() {
        let loader = ViewLoader::eager(test_module());
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = loader.load();
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(module)) => assert_eq!(module.path(), "views/test/view"),
            other => panic!("eager loader did not settle immediately: {other:?}"),
        }
    }

    #[test]
    fn deferred_loader_suspends_before_it_settles() {
        // Placeholder-then-content: the first poll must yield, and the
        // module may only materialize after the suspension resumes.
        let loader = ViewLoader::deferred(test_module);
        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let mut fut = loader.load();
        assert!(fut.as_mut().poll(&mut cx).is_pending());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(Ok(module)) => assert_eq!(module.path(), "views/test/view"),
            other => panic!("deferred loader did not settle after resuming: {other:?}"),
        }
    }

    #[test]
    fn clones_share_the_load_operation() {
        let loader = ViewLoader::eager(test_module());
        let clone = loader.clone();
        let first = block_on(loader.load()).unwrap();
        let second = block_on(clone.load()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn failing_loader_reports_the_module_path() {
        let loader = ViewLoader::new(|| {
            Box::pin(std::future::ready(Err(ViewLoadError {
                path: "views/broken/view".to_string(),
                reason: "chunk fetch failed".to_string(),
            }))) as LoadFuture
        });
        let err = block_on(loader.load()).unwrap_err();
        assert!(err.to_string().contains("views/broken/view"));
    }
}
