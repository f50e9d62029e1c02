use crate::components::{error::DismissibleError, layout::Layout};
use crate::pages::dashboard::{
    components::{CustomizePanel, ModuleCard},
    utils::DashboardModule,
    view_model::use_dashboard_view_model,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let modules = vm.visible_modules();
    let pending_leaves = vm.pending_leaves();
    let load_error = vm.load_error();
    let error_dismissed = create_rw_signal(false);
    let visible_load_error =
        Signal::derive(move || if error_dismissed.get() { None } else { load_error.get() });
    let toggle_pending = vm.toggle_action.pending();

    view! {
        <Title text="Dashboard | WorkHub" />
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{"Personalized Employee Dashboard"}</h1>
                    <button
                        type="button"
                        class="text-sm font-medium text-blue-600 hover:text-blue-800"
                        aria-expanded=move || vm.customizing.get().to_string()
                        on:click=move |_| vm.customizing.update(|open| *open = !*open)
                    >
                        {move || if vm.customizing.get() { "Done" } else { "Customize" }}
                    </button>
                </div>
                <DismissibleError
                    error=visible_load_error
                    on_dismiss=Callback::new(move |_| error_dismissed.set(true))
                    on_retry=Callback::new(move |_| {
                        error_dismissed.set(false);
                        vm.refetch();
                    })
                />
                <DismissibleError
                    error=vm.message.into()
                    on_dismiss=Callback::new(move |_| vm.message.set(None))
                />
                <Show when=move || vm.customizing.get()>
                    <CustomizePanel
                        config=vm.config()
                        on_toggle=vm.on_toggle()
                        disabled=toggle_pending.into()
                    />
                </Show>
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    <For
                        each=move || modules.get()
                        key=|module| *module
                        children=move |module: DashboardModule| {
                            if module == DashboardModule::Leave {
                                view! { <ModuleCard module=module badge=pending_leaves /> }.into_view()
                            } else {
                                view! { <ModuleCard module=module /> }.into_view()
                            }
                        }
                    />
                </div>
            </div>
        </Layout>
    }
}
