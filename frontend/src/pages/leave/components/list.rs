use crate::api::LeaveRequest;
use crate::pages::leave::{
    components::{countdown::PendingCountdown, status_badge::LeaveStatusBadge},
    deadline::DeadlineTimers,
};
use crate::utils::time::format_date_range;
use leptos::*;

#[component]
pub fn LeaveRequestList(
    requests: Signal<Vec<LeaveRequest>>,
    timers: StoredValue<DeadlineTimers>,
    on_expired: Callback<String>,
    on_cancel: Callback<String>,
    cancel_disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="divide-y divide-gray-200">
            <For
                each=move || requests.get()
                // A status change must remount the row so the countdown and
                // cancel control appear or disappear with it.
                key=|request| (request.id.clone(), request.status)
                children=move |request: LeaveRequest| {
                    let id = request.id.clone();
                    let pending = request.is_pending();
                    let reason = request.reason_text().trim().to_string();
                    view! {
                        <li class="flex items-center justify-between gap-4 px-6 py-4">
                            <div>
                                <p class="text-sm font-medium text-gray-900">
                                    {format_date_range(request.from_date, request.to_date)}
                                </p>
                                <p class="text-sm text-gray-500">
                                    {if reason.is_empty() { "No reason given".to_string() } else { reason }}
                                </p>
                            </div>
                            <div class="flex items-center gap-3">
                                <LeaveStatusBadge status=request.status />
                                {pending.then(|| {
                                    let cancel_id = id.clone();
                                    view! {
                                        <PendingCountdown
                                            request_id=id.clone()
                                            timers=timers
                                            on_expired=on_expired
                                        />
                                        <button
                                            type="button"
                                            aria-label="Cancel leave request"
                                            class="text-sm font-medium text-red-600 hover:text-red-800 disabled:opacity-50"
                                            disabled=move || cancel_disabled.get()
                                            on:click=move |_| on_cancel.call(cancel_id.clone())
                                        >
                                            "Cancel"
                                        </button>
                                    }
                                })}
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}
