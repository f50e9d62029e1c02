use crate::api::{ApiClient, ApiError, DashboardConfig, DashboardData};
use crate::pages::dashboard::{
    repository::DashboardRepository,
    utils::{pending_leave_count, visible_modules, DashboardModule},
};
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleToggle {
    pub module: DashboardModule,
    pub visible: bool,
}

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub reload: RwSignal<u32>,
    pub dashboard_resource: Resource<u32, Result<DashboardData, ApiError>>,
    pub toggle_action: Action<ModuleToggle, Result<DashboardConfig, ApiError>>,
    pub message: RwSignal<Option<ApiError>>,
    pub customizing: RwSignal<bool>,
}

fn apply_toggle_result(
    result: &Result<DashboardConfig, ApiError>,
    message: RwSignal<Option<ApiError>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(_) => {
            message.set(None);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => {
            log::warn!("Failed to update dashboard config: {}", err);
            message.set(Some(err.clone()));
        }
    }
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(DashboardRepository::new(api));
        let reload = create_rw_signal(0u32);
        let message = create_rw_signal(None::<ApiError>);
        let customizing = create_rw_signal(false);

        let dashboard_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_dashboard().await }
            },
        );

        let toggle_action = create_action(move |toggle: &ModuleToggle| {
            let repo = repository.get_value();
            let toggle = *toggle;
            async move {
                let result = repo
                    .set_module_visibility(toggle.module, toggle.visible)
                    .await;
                apply_toggle_result(&result, message, reload);
                result
            }
        });

        Self {
            reload,
            dashboard_resource,
            toggle_action,
            message,
            customizing,
        }
    }

    pub fn config(&self) -> Signal<Option<DashboardConfig>> {
        let resource = self.dashboard_resource;
        Signal::derive(move || {
            resource
                .map(|result| result.as_ref().ok().map(|data| data.config))
                .flatten()
        })
    }

    pub fn visible_modules(&self) -> Signal<Vec<DashboardModule>> {
        let config = self.config();
        Signal::derive(move || visible_modules(config.get().as_ref()))
    }

    pub fn pending_leaves(&self) -> Signal<usize> {
        let resource = self.dashboard_resource;
        Signal::derive(move || {
            resource
                .map(|result| result.as_ref().map_or(0, pending_leave_count))
                .unwrap_or(0)
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.dashboard_resource;
        Signal::derive(move || {
            resource
                .map(|result| result.as_ref().err().cloned())
                .flatten()
        })
    }

    pub fn on_toggle(&self) -> Callback<ModuleToggle> {
        let toggle_action = self.toggle_action;
        Callback::new(move |toggle: ModuleToggle| toggle_action.dispatch(toggle))
    }

    pub fn refetch(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
