use crate::components::{
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::DismissibleError,
    layout::{LoadingSpinner, SuccessMessage},
};
use crate::pages::leave::{
    components::{BalanceCard, LeaveRequestList},
    layout::LeaveLayout,
    view_model::{use_leave_view_model, CANCEL_CONFIRM_MESSAGE},
};
use leptos::*;
use leptos_meta::Title;

/// The application form is served outside this app.
pub const APPLY_FOR_LEAVE_HREF: &str = "/leave/apply";
const AUTO_APPROVE_HINT: &str =
    "Pending requests show a 5-minute countdown; after 5 min they are auto-approved.";

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = use_leave_view_model();

    create_effect(move |_| untrack(move || vm.load_all()));

    let requests_loading = vm.load_requests_action.pending();
    let balance_loading = vm.load_balance_action.pending();
    let cancel_pending = vm.cancel_action.pending();
    let cancel_error = Signal::derive(move || vm.cancel_message.with(|msg| msg.error.clone()));
    let cancel_success = move || vm.cancel_message.with(|msg| msg.success.clone());
    let cancel_retryable =
        Signal::derive(move || cancel_error.with(|err| err.as_ref().is_some_and(|e| !e.is_not_found())));
    let request_list = Signal::derive(move || vm.requests.get().unwrap_or_default());
    let list_shape = vm.list_shape();

    view! {
        <Title text="Leave | WorkHub" />
        <LeaveLayout>
            <BalanceCard balance=vm.balance.into() loading=balance_loading.into() />
            <DismissibleError
                error=vm.balance_error.into()
                on_dismiss=Callback::new(move |_| vm.balance_error.set(None))
                on_retry=Callback::new(move |_| vm.load_balance())
                retry_disabled=balance_loading
            />

            <div class="bg-white shadow rounded-lg">
                <div class="px-6 py-4 border-b">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-medium text-gray-900">{"My Leave Requests"}</h2>
                        <a
                            href=APPLY_FOR_LEAVE_HREF
                            rel="external"
                            class="inline-flex items-center rounded-md bg-blue-600 px-3 py-2 text-sm font-medium text-white hover:bg-blue-700"
                        >
                            {"Apply for Leave"}
                        </a>
                    </div>
                    {move || cancel_success().map(|message| view! {
                        <div class="mt-2"><SuccessMessage message=message /></div>
                    })}
                    <Show
                        when=move || cancel_retryable.get()
                        fallback=move || view! {
                            <DismissibleError
                                error=cancel_error
                                on_dismiss=Callback::new(move |_| vm.cancel_message.update(|msg| msg.clear()))
                            />
                        }
                    >
                        <DismissibleError
                            error=cancel_error
                            on_dismiss=Callback::new(move |_| vm.cancel_message.update(|msg| msg.clear()))
                            on_retry=Callback::new(move |_| vm.retry_cancel())
                            retry_disabled=cancel_pending
                        />
                    </Show>
                    <DismissibleError
                        error=vm.list_error.into()
                        on_dismiss=Callback::new(move |_| vm.list_error.set(None))
                        on_retry=Callback::new(move |_| vm.load_requests())
                        retry_disabled=requests_loading
                    />
                </div>
                {move || match list_shape.get() {
                    None if requests_loading.get() => view! { <LoadingSpinner /> }.into_view(),
                    None => ().into_view(),
                    Some(true) => view! {
                        <div class="p-6">
                            <EmptyState
                                title="No leave requests yet"
                                description="Requests you submit will appear here."
                            />
                        </div>
                    }
                    .into_view(),
                    Some(false) => view! {
                        <LeaveRequestList
                            requests=request_list
                            timers=vm.timers
                            on_expired=vm.on_expired()
                            on_cancel=vm.on_request_cancel()
                            cancel_disabled=cancel_pending.into()
                        />
                    }
                    .into_view(),
                }}
                <p class="px-6 py-3 border-t text-xs text-gray-500">{AUTO_APPROVE_HINT}</p>
            </div>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_cancel.get().is_some())
                title="Cancel leave request"
                message=CANCEL_CONFIRM_MESSAGE.to_string()
                on_confirm=Callback::new(move |_| vm.confirm_cancel())
                on_cancel=Callback::new(move |_| vm.dismiss_cancel())
                confirm_label="Cancel request"
                cancel_label="Keep request"
                confirm_disabled=cancel_pending
                destructive=true
            />
        </LeaveLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::MockServer;
    use crate::api::{ApiClient, ApiError, LeaveBalance, LeaveStatus};
    use crate::pages::leave::view_model::LeaveViewModel;
    use crate::test_support::helpers::leave_request;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::time::now_utc;
    use chrono::Duration;

    fn seconds_ago(seconds: i64) -> String {
        (now_utc() - Duration::seconds(seconds)).to_rfc3339()
    }

    fn render_page(setup: impl FnOnce(&LeaveViewModel) + 'static) -> String {
        let server = MockServer::start();
        let base = server.url("/api");
        render_to_string(move || {
            provide_context(ApiClient::new_with_base_url(base));
            let vm = LeaveViewModel::new();
            setup(&vm);
            if let Some(list) = vm.requests.get_untracked() {
                vm.timers.update_value(|timers| {
                    timers.sync(&list, now_utc());
                });
            }
            provide_context(vm);
            view! { <LeavePage /> }
        })
    }

    #[test]
    fn terminal_requests_have_no_countdown_or_cancel_control() {
        let html = render_page(|vm| {
            vm.requests.set(Some(vec![
                leave_request("1", LeaveStatus::Approved, Some(&seconds_ago(30))),
                leave_request("2", LeaveStatus::Rejected, Some(&seconds_ago(30))),
            ]));
        });
        assert!(html.contains("Approved"));
        assert!(html.contains("Rejected"));
        assert!(html.contains("Mar 10, 2025 - Mar 12, 2025"));
        assert!(!html.contains("Auto-approves in"));
        assert!(!html.contains("Cancel leave request"));
    }

    #[test]
    fn pending_request_two_minutes_old_shows_three_minutes_left() {
        let html = render_page(|vm| {
            vm.requests.set(Some(vec![leave_request(
                "7",
                LeaveStatus::Pending,
                Some(&seconds_ago(120)),
            )]));
        });
        assert!(html.contains("Auto-approves in "));
        assert!(html.contains("3:00"));
        assert!(html.contains("aria-label=\"Cancel leave request\""));
    }

    #[test]
    fn pending_request_past_its_deadline_reads_auto_approved() {
        let html = render_page(|vm| {
            vm.requests.set(Some(vec![leave_request(
                "8",
                LeaveStatus::Pending,
                Some(&seconds_ago(301)),
            )]));
        });
        assert!(html.contains("Auto approved"));
        assert!(!html.contains("Auto-approves in"));
    }

    #[test]
    fn list_error_banner_keeps_previous_rows_visible() {
        let html = render_page(|vm| {
            vm.requests.set(Some(vec![
                leave_request("1", LeaveStatus::Pending, Some(&seconds_ago(10))),
                leave_request("2", LeaveStatus::Pending, Some(&seconds_ago(20))),
                leave_request("3", LeaveStatus::Pending, Some(&seconds_ago(30))),
            ]));
            vm.list_error.set(Some(ApiError::request_failed("Request failed: offline")));
        });
        assert!(html.contains("Request failed: offline"));
        assert!(html.contains("Retry"));
        assert_eq!(html.matches("Auto-approves in").count(), 3);
    }

    #[test]
    fn apply_link_and_auto_approve_hint_render() {
        let html = render_page(|vm| vm.requests.set(Some(Vec::new())));
        assert!(html.contains("href=\"/leave/apply\""));
        assert!(html.contains("Apply for Leave"));
        assert!(html.contains("Pending requests show a 5-minute countdown"));
    }

    #[test]
    fn low_balance_and_empty_state_render() {
        let html = render_page(|vm| {
            vm.requests.set(Some(Vec::new()));
            vm.balance.set(Some(LeaveBalance {
                total_leaves: 20,
                used_leaves: 16,
                remaining_leaves: 4,
            }));
        });
        assert!(html.contains("No leave requests yet"));
        assert!(html.contains("Low leave balance"));
    }

    #[test]
    fn confirm_prompt_renders_for_pending_cancel() {
        let html = render_page(|vm| {
            vm.requests.set(Some(vec![leave_request(
                "7",
                LeaveStatus::Pending,
                Some(&seconds_ago(10)),
            )]));
            vm.request_cancel("7".into());
        });
        assert!(html.contains(CANCEL_CONFIRM_MESSAGE));
        assert!(html.contains("Keep request"));
    }
}
