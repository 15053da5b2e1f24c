use futures::future::{AbortHandle, Abortable};
use leptos::*;
use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};

/// Handle to an in-flight UI task. Cancelling drops the underlying future,
/// which aborts any pending fetch it owns.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    id: u64,
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Wraps `fut` so it resolves to `None` once the returned handle is cancelled.
pub fn cancellable<F>(fut: F) -> (impl Future<Output = Option<F::Output>>, TaskHandle)
where
    F: Future,
{
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    let (abort, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fut, registration);
    let handle = TaskHandle {
        id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        abort,
    };
    (async move { task.await.ok() }, handle)
}

/// Spawns `fut` on the UI task queue, tied to the current reactive owner:
/// when the owning component is cleaned up the task is cancelled, so a late
/// response never writes into disposed state.
pub fn spawn_scoped<F>(fut: F) -> TaskHandle
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = cancellable(fut);
    let on_unmount = handle.clone();
    on_cleanup(move || on_unmount.cancel());
    spawn_local(async move {
        if task.await.is_none() {
            log::debug!("scoped task cancelled before completion");
        }
    });
    handle
}

/// At most one task per component action. Event handlers run outside any
/// reactive owner, so the slot is created during component setup and owns the
/// single cleanup hook that cancels whatever is still in flight on unmount.
#[derive(Clone, Copy)]
pub struct TaskSlot {
    current: StoredValue<Option<TaskHandle>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        let current = store_value(None::<TaskHandle>);
        on_cleanup(move || {
            current.try_with_value(|slot| {
                if let Some(handle) = slot {
                    handle.cancel();
                }
            });
        });
        Self { current }
    }

    pub fn is_busy(&self) -> bool {
        self.current.try_with_value(Option::is_some).unwrap_or(false)
    }

    /// Cancels the running task, if any, and starts `fut` in its place.
    pub fn restart<F>(&self, fut: F) -> TaskHandle
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, handle) = self.replace(fut);
        spawn_local(task);
        handle
    }

    /// Starts `fut` only when nothing is running.
    pub fn start_if_idle<F>(&self, fut: F) -> Option<TaskHandle>
    where
        F: Future<Output = ()> + 'static,
    {
        if self.is_busy() {
            log::debug!("task already running, ignoring request");
            return None;
        }
        Some(self.restart(fut))
    }

    fn replace<F>(&self, fut: F) -> (impl Future<Output = ()> + 'static, TaskHandle)
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, handle) = cancellable(fut);
        let previous = self
            .current
            .try_update_value(|slot| slot.replace(handle.clone()))
            .flatten();
        if let Some(previous) = previous {
            previous.cancel();
        }
        let current = self.current;
        let id = handle.id;
        let driven = async move {
            if task.await.is_none() {
                log::debug!("slot task cancelled before completion");
            }
            current.try_update_value(|slot| {
                if slot.as_ref().is_some_and(|h| h.id == id) {
                    *slot = None;
                }
            });
        };
        (driven, handle)
    }
}

impl Default for TaskSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[tokio::test]
    async fn completed_task_yields_output() {
        let (task, handle) = cancellable(async { 7 });
        assert_eq!(task.await, Some(7));
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_task_skips_its_body() {
        let wrote = Rc::new(Cell::new(false));
        let flag = wrote.clone();
        let (task, handle) = cancellable(async move {
            flag.set(true);
        });
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(task.await.is_none());
        assert!(!wrote.get());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_during_await_drops_the_pending_write() {
        let wrote = Rc::new(Cell::new(false));
        let flag = wrote.clone();
        let (task, handle) = cancellable(async move {
            crate::utils::time::sleep(std::time::Duration::from_secs(5)).await;
            flag.set(true);
        });
        let canceller = handle.clone();
        let (result, _) = futures::join!(task, async move {
            crate::utils::time::sleep(std::time::Duration::from_secs(1)).await;
            canceller.cancel();
        });
        assert!(result.is_none());
        assert!(!wrote.get());
    }

    #[tokio::test(start_paused = true)]
    async fn slot_replaces_running_task_and_frees_itself() {
        let runtime = create_runtime();
        let slot = TaskSlot::new();
        let first_wrote = Rc::new(Cell::new(false));
        let second_wrote = Rc::new(Cell::new(false));

        let flag = first_wrote.clone();
        let (first, first_handle) = slot.replace(async move {
            crate::utils::time::sleep(std::time::Duration::from_secs(5)).await;
            flag.set(true);
        });
        assert!(slot.is_busy());

        let flag = second_wrote.clone();
        let (second, second_handle) = slot.replace(async move {
            flag.set(true);
        });
        assert!(first_handle.is_cancelled());
        assert!(!second_handle.is_cancelled());

        futures::join!(first, second);
        assert!(!first_wrote.get());
        assert!(second_wrote.get());
        assert!(!slot.is_busy());
        runtime.dispose();
    }

    #[tokio::test]
    async fn stale_completion_keeps_newer_task_registered() {
        let runtime = create_runtime();
        let slot = TaskSlot::new();
        let (first, _) = slot.replace(async {});
        let (_second, second_handle) = slot.replace(async {});
        first.await;
        assert!(slot.is_busy());
        second_handle.cancel();
        runtime.dispose();
    }
}
