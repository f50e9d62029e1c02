use crate::pages::leave::deadline::{DeadlineTick, DeadlineTimers};
use crate::utils::time::now_utc;
use chrono::{DateTime, Utc};
use leptos::*;

pub const AUTO_APPROVED_LABEL: &str = "Auto approved";

/// One interval tick: advances the registry timer, publishes the new state
/// and forwards the expiry signal on the tick that crossed the deadline.
/// Retired timers are left alone.
pub fn advance_countdown(
    timers: StoredValue<DeadlineTimers>,
    request_id: &str,
    now: DateTime<Utc>,
    set_tick: WriteSignal<Option<DeadlineTick>>,
    on_expired: Callback<String>,
) -> Option<DeadlineTick> {
    let next = timers
        .try_update_value(|timers| timers.tick(request_id, now))
        .flatten()?;
    set_tick.set(Some(next));
    if next.fired {
        on_expired.call(request_id.to_string());
    }
    Some(next)
}

/// Live countdown for one pending request. The timer itself lives in the
/// page-owned registry; this component only ticks it once per second and
/// forwards the single expiry signal.
#[component]
pub fn PendingCountdown(
    #[prop(into)] request_id: String,
    timers: StoredValue<DeadlineTimers>,
    on_expired: Callback<String>,
) -> impl IntoView {
    let initial = timers
        .try_with_value(|timers| timers.peek(&request_id, now_utc()))
        .flatten();
    let (tick, set_tick) = create_signal(initial);

    // The interval is dropped, and so cancelled, when the row unmounts.
    #[cfg(target_arch = "wasm32")]
    {
        let id = request_id.clone();
        let _interval = store_value(gloo_timers::callback::Interval::new(1000, move || {
            advance_countdown(timers, &id, now_utc(), set_tick, on_expired);
        }));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (set_tick, on_expired);

    view! {
        <span class="text-xs" data-request-id=request_id>
            {move || match tick.get() {
                Some(tick) if tick.is_expired() => view! {
                    <span class="inline-flex items-center rounded-full px-2.5 py-0.5 font-medium bg-green-100 text-green-800">
                        {AUTO_APPROVED_LABEL}
                    </span>
                }
                .into_view(),
                Some(tick) => view! {
                    <span class="font-mono text-gray-600" aria-live="polite" title="Time until automatic approval">
                        {"Auto-approves in "}{tick.countdown_label()}
                    </span>
                }
                .into_view(),
                None => ().into_view(),
            }}
        </span>
    }
}
