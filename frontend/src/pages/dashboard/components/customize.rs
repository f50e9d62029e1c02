use crate::api::DashboardConfig;
use crate::pages::dashboard::{utils::DashboardModule, view_model::ModuleToggle};
use leptos::*;

/// One checkbox per module; each change posts a single visibility flag.
#[component]
pub fn CustomizePanel(
    config: Signal<Option<DashboardConfig>>,
    on_toggle: Callback<ModuleToggle>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <fieldset class="bg-white shadow rounded-lg p-6">
            <legend class="text-sm font-medium text-gray-900">{"Show on dashboard"}</legend>
            <div class="mt-3 grid grid-cols-1 gap-2 sm:grid-cols-2">
                {DashboardModule::ALL
                    .into_iter()
                    .map(|module| {
                        let checked = move || {
                            config.get().map_or(true, |config| module.is_visible(&config))
                        };
                        view! {
                            <label class="flex items-center gap-2 text-sm text-gray-700">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    disabled=move || disabled.get()
                                    on:change=move |ev| {
                                        on_toggle.call(ModuleToggle {
                                            module,
                                            visible: event_target_checked(&ev),
                                        })
                                    }
                                />
                                {module.title()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
