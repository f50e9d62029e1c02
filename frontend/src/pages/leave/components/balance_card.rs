use crate::api::LeaveBalance;
use crate::pages::leave::utils::{is_low_balance, usage_percent, UsageTone};
use leptos::*;

#[component]
fn BalanceFigure(label: &'static str, value: u32) -> impl IntoView {
    view! {
        <div>
            <dt class="text-xs uppercase tracking-wide text-gray-500">{label}</dt>
            <dd class="text-2xl font-semibold text-gray-900">{value}</dd>
        </div>
    }
}

#[component]
pub fn BalanceCard(balance: Signal<Option<LeaveBalance>>, loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h2 class="text-lg font-medium text-gray-900 mb-4">{"Leave Balance"}</h2>
            {move || match balance.get() {
                None if loading.get() => view! {
                    <div class="animate-pulse space-y-3" aria-busy="true">
                        <div class="h-6 bg-gray-200 rounded w-1/2"></div>
                        <div class="h-2 bg-gray-200 rounded"></div>
                    </div>
                }
                .into_view(),
                None => view! {
                    <p class="text-sm text-gray-500">{"Balance unavailable."}</p>
                }
                .into_view(),
                Some(balance) => {
                    let percent = usage_percent(&balance);
                    let tone = UsageTone::from_percent(percent);
                    view! {
                        <dl class="grid grid-cols-3 gap-4">
                            <BalanceFigure label="Total" value=balance.total_leaves />
                            <BalanceFigure label="Used" value=balance.used_leaves />
                            <BalanceFigure label="Remaining" value=balance.remaining_leaves />
                        </dl>
                        <div
                            class="mt-4 h-2 w-full rounded bg-gray-100"
                            role="progressbar"
                            aria-valuemin="0"
                            aria-valuemax="100"
                            aria-valuenow=percent
                        >
                            <div
                                class=format!("h-2 rounded {}", tone.bar_class())
                                style=format!("width: {}%", percent)
                            ></div>
                        </div>
                        <p class="mt-1 text-xs text-gray-500">{format!("{}% used", percent)}</p>
                        <Show when=move || is_low_balance(&balance)>
                            <p class="mt-3 text-sm font-medium text-red-700" data-low-balance="true">
                                {format!(
                                    "Low leave balance: only {} day(s) remaining.",
                                    balance.remaining_leaves,
                                )}
                            </p>
                        </Show>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
