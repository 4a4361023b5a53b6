//! Cancellable periodic refresh built on [`PollGuard`].

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::callback::{Interval, Timeout};
use shared::polling::{PollGuard, PollOutcome, PollSkip};
use wasm_bindgen_futures::spawn_local;
use web_sys::window;
use yew::prelude::*;

/// What a single refresh reports back to the poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    Continue,
    Failed,
    /// The polled resource reached a terminal state; stop after the grace delay.
    Finished,
}

type PollTask = Box<dyn Fn() -> LocalBoxFuture<'static, PollStatus>>;

struct PollerInner {
    label: &'static str,
    guard: RefCell<PollGuard>,
    task: PollTask,
    interval: RefCell<Option<Interval>>,
    /// Pending retry for an attempt that came in before the spacing elapsed.
    retry: RefCell<Option<Timeout>>,
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn stop(inner: &PollerInner) {
    inner.guard.borrow_mut().stop();
    let interval = inner.interval.borrow_mut().take();
    let retry = inner.retry.borrow_mut().take();
    drop(interval);
    drop(retry);
}

fn schedule_retry(inner: &Rc<PollerInner>, wait_ms: f64) {
    if inner.retry.borrow().is_some() {
        return;
    }
    let weak = Rc::downgrade(inner);
    let timeout = Timeout::new(wait_ms.ceil() as u32, move || {
        // Deferred so the timer is not dropped from inside its own callback.
        spawn_local(async move {
            if let Some(inner) = weak.upgrade() {
                let fired = inner.retry.borrow_mut().take();
                drop(fired);
                let _ = trigger(&inner);
            }
        });
    });
    *inner.retry.borrow_mut() = Some(timeout);
}

fn trigger(inner: &Rc<PollerInner>) -> Result<(), PollSkip> {
    let ticket = inner.guard.borrow_mut().try_begin(now_ms());
    let ticket = match ticket {
        Ok(ticket) => ticket,
        Err(skip) => {
            log::debug!("{} refresh skipped: {:?}", inner.label, skip);
            match skip {
                PollSkip::TooSoon { wait_ms } => schedule_retry(inner, wait_ms),
                PollSkip::Stopped => {
                    let inner = inner.clone();
                    spawn_local(async move { stop(&inner) });
                }
                PollSkip::InFlight => {}
            }
            return Err(skip);
        }
    };

    let inner = inner.clone();
    spawn_local(async move {
        let status = (inner.task)().await;
        let outcome = match status {
            PollStatus::Failed => PollOutcome::Failure,
            PollStatus::Continue | PollStatus::Finished => PollOutcome::Success,
        };
        let mut guard = inner.guard.borrow_mut();
        guard.complete(ticket, outcome);
        if status == PollStatus::Finished {
            log::info!("{} reached a final state", inner.label);
            guard.finish(now_ms());
        }
    });
    Ok(())
}

/// Runs a task immediately and then every `period_ms`, at most one at a time.
/// An early attempt is retried once the spacing allows it. After a
/// `Finished` result the next attempt past the grace delay clears the
/// interval. Dropping the poller clears its timers.
pub struct Poller {
    inner: Rc<PollerInner>,
}

impl Poller {
    pub fn start<F, Fut>(label: &'static str, period_ms: u32, task: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = PollStatus> + 'static,
    {
        let inner = Rc::new(PollerInner {
            label,
            guard: RefCell::new(PollGuard::new(period_ms)),
            task: Box::new(move || task().boxed_local()),
            interval: RefCell::new(None),
            retry: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let interval = Interval::new(period_ms, move || {
            if let Some(inner) = weak.upgrade() {
                let _ = trigger(&inner);
            }
        });
        *inner.interval.borrow_mut() = Some(interval);

        let _ = trigger(&inner);
        Self { inner }
    }

    /// Manual refresh. Obeys the same in-flight and spacing rules as the interval.
    pub fn refresh(&self) -> Result<(), PollSkip> {
        trigger(&self.inner)
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        stop(&self.inner);
    }
}

/// Keeps a [`Poller`] alive for as long as `deps` stay the same and `active`
/// is true. Returns a manual refresh callback.
#[hook]
pub fn use_poller<D, F, Fut>(
    deps: D,
    active: bool,
    label: &'static str,
    period_ms: u32,
    task: F,
) -> Callback<()>
where
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = PollStatus> + 'static,
{
    let slot = use_mut_ref(|| None::<Poller>);

    {
        let slot = slot.clone();
        use_effect_with((deps, active), move |(deps, active)| {
            if *active {
                let deps = deps.clone();
                let poller = Poller::start(label, period_ms, move || task(deps.clone()));
                *slot.borrow_mut() = Some(poller);
            }
            move || {
                let poller = slot.borrow_mut().take();
                drop(poller);
            }
        });
    }

    Callback::from(move |_: ()| {
        if let Some(poller) = slot.borrow().as_ref() {
            if let Err(PollSkip::TooSoon { wait_ms }) = poller.refresh() {
                log::info!("{} refreshed recently, refreshing again in {:.0}ms", label, wait_ms);
            }
        }
    })
}
