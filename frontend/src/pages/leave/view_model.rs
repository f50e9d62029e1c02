use crate::api::{ApiClient, ApiError, LeaveBalance, LeaveRequest};
use crate::pages::leave::{
    deadline::{DeadlineTick, DeadlineTimers},
    repository::LeaveRepository,
    utils::MessageState,
};
use crate::utils::time::now_utc;
use chrono::{DateTime, Utc};
use leptos::*;

pub const CANCEL_CONFIRM_MESSAGE: &str = "Cancel this leave request? This cannot be undone.";
const CANCELLED_MESSAGE: &str = "Leave request cancelled.";
const ALREADY_SETTLED_MESSAGE: &str =
    "This leave request was already approved, rejected or removed. The list has been refreshed.";

/// Owns the caller's leave requests, their balance and the auto-approval
/// timers for the lifetime of the leave page.
#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub requests: RwSignal<Option<Vec<LeaveRequest>>>,
    pub balance: RwSignal<Option<LeaveBalance>>,
    pub list_error: RwSignal<Option<ApiError>>,
    pub balance_error: RwSignal<Option<ApiError>>,
    pub cancel_message: RwSignal<MessageState>,
    pub pending_cancel: RwSignal<Option<String>>,
    pub last_cancel: RwSignal<Option<String>>,
    pub timers: StoredValue<DeadlineTimers>,
    pub load_requests_action: Action<(), Result<(), ApiError>>,
    pub load_balance_action: Action<(), Result<(), ApiError>>,
    pub cancel_action: Action<String, Result<(), ApiError>>,
}

/// Adopts a fetched list wholesale. Returns the ids whose deadline had
/// already passed when first observed.
fn apply_requests_result(
    list: Vec<LeaveRequest>,
    now: DateTime<Utc>,
    requests: RwSignal<Option<Vec<LeaveRequest>>>,
    list_error: RwSignal<Option<ApiError>>,
    timers: StoredValue<DeadlineTimers>,
) -> Vec<String> {
    let fired = timers
        .try_update_value(|timers| timers.sync(&list, now))
        .unwrap_or_default();
    requests.set(Some(list));
    list_error.set(None);
    fired
}

fn apply_balance_result(
    result: Result<LeaveBalance, ApiError>,
    balance: RwSignal<Option<LeaveBalance>>,
    balance_error: RwSignal<Option<ApiError>>,
) -> Result<(), ApiError> {
    match result {
        Ok(value) => {
            balance.set(Some(value));
            balance_error.set(None);
            Ok(())
        }
        Err(err) => {
            log::warn!("Failed to load leave balance: {}", err);
            balance_error.set(Some(err.clone()));
            Err(err)
        }
    }
}

fn apply_cancel_result(
    id: &str,
    result: &Result<(), ApiError>,
    cancel_message: RwSignal<MessageState>,
    load_requests_action: Action<(), Result<(), ApiError>>,
    load_balance_action: Action<(), Result<(), ApiError>>,
) {
    match result {
        Ok(()) => {
            cancel_message.update(|msg| msg.set_success(CANCELLED_MESSAGE));
            load_requests_action.dispatch(());
            load_balance_action.dispatch(());
        }
        Err(err) if err.is_not_found() => {
            log::info!("Leave request {} already settled; reloading list", id);
            cancel_message.update(|msg| {
                msg.set_error(ApiError {
                    error: ALREADY_SETTLED_MESSAGE.to_string(),
                    ..err.clone()
                })
            });
            load_requests_action.dispatch(());
        }
        Err(err) => {
            log::warn!("Failed to cancel leave request {}: {}", id, err);
            cancel_message.update(|msg| msg.set_error(err.clone()));
        }
    }
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveRepository::new(api));

        let requests = create_rw_signal(None::<Vec<LeaveRequest>>);
        let balance = create_rw_signal(None::<LeaveBalance>);
        let list_error = create_rw_signal(None::<ApiError>);
        let balance_error = create_rw_signal(None::<ApiError>);
        let cancel_message = create_rw_signal(MessageState::default());
        let pending_cancel = create_rw_signal(None::<String>);
        let last_cancel = create_rw_signal(None::<String>);
        let timers = store_value(DeadlineTimers::new());

        let load_requests_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            async move {
                // A request already past its deadline on first sight fires
                // during adoption; refetch until no new timer fires.
                loop {
                    match repo.list_my_leaves().await {
                        Ok(list) => {
                            let fired = apply_requests_result(
                                list,
                                now_utc(),
                                requests,
                                list_error,
                                timers,
                            );
                            if fired.is_empty() {
                                return Ok(());
                            }
                            log::info!(
                                "Auto-approval deadline already passed for {:?}; reloading",
                                fired
                            );
                        }
                        Err(err) => {
                            log::warn!("Failed to load leave requests: {}", err);
                            list_error.set(Some(err.clone()));
                            return Err(err);
                        }
                    }
                }
            }
        });

        let load_balance_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            async move { apply_balance_result(repo.get_balance().await, balance, balance_error) }
        });

        let cancel_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move {
                let result = repo.cancel_leave(&id).await;
                apply_cancel_result(
                    &id,
                    &result,
                    cancel_message,
                    load_requests_action,
                    load_balance_action,
                );
                result
            }
        });

        Self {
            requests,
            balance,
            list_error,
            balance_error,
            cancel_message,
            pending_cancel,
            last_cancel,
            timers,
            load_requests_action,
            load_balance_action,
            cancel_action,
        }
    }

    pub fn load_all(&self) {
        self.load_requests_action.dispatch(());
        self.load_balance_action.dispatch(());
    }

    pub fn load_requests(&self) {
        self.load_requests_action.dispatch(());
    }

    pub fn load_balance(&self) {
        self.load_balance_action.dispatch(());
    }

    /// Opens the confirmation prompt, but only for a request that is still
    /// pending in the current collection.
    pub fn request_cancel(&self, id: String) {
        let cancellable = self.requests.with_untracked(|list| {
            list.as_ref()
                .is_some_and(|list| list.iter().any(|r| r.id == id && r.is_pending()))
        });
        if cancellable {
            self.cancel_message.update(|msg| msg.clear());
            self.pending_cancel.set(Some(id));
        }
    }

    pub fn confirm_cancel(&self) {
        if let Some(id) = self.pending_cancel.get_untracked() {
            self.pending_cancel.set(None);
            self.last_cancel.set(Some(id.clone()));
            self.cancel_action.dispatch(id);
        }
    }

    /// Re-opens the prompt for the last attempted cancellation, if that
    /// request is still pending.
    pub fn retry_cancel(&self) {
        if let Some(id) = self.last_cancel.get_untracked() {
            self.request_cancel(id);
        }
    }

    pub fn dismiss_cancel(&self) {
        self.pending_cancel.set(None);
    }

    pub fn on_deadline_expired(&self, id: String) {
        log::info!("Auto-approval deadline reached for leave request {}; reloading", id);
        self.load_requests_action.dispatch(());
    }

    pub fn on_expired(&self) -> Callback<String> {
        let vm = *self;
        Callback::new(move |id: String| vm.on_deadline_expired(id))
    }

    pub fn on_request_cancel(&self) -> Callback<String> {
        let vm = *self;
        Callback::new(move |id: String| vm.request_cancel(id))
    }

    /// `None` until a list has loaded, then whether it is empty. Only
    /// changes when that shape changes, not on every reload.
    pub fn list_shape(&self) -> Memo<Option<bool>> {
        let requests = self.requests;
        create_memo(move |_| requests.with(|list| list.as_ref().map(Vec::is_empty)))
    }

    /// Read-only countdown state for first render.
    pub fn peek_deadline(&self, id: &str) -> Option<DeadlineTick> {
        self.timers
            .with_value(|timers| timers.peek(id, now_utc()))
    }
}

impl Default for LeaveViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_leave_view_model() -> LeaveViewModel {
    match use_context::<LeaveViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = LeaveViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
