use crate::pages::dashboard::utils::DashboardModule;
use leptos::*;

#[component]
pub fn ModuleCard(module: DashboardModule, #[prop(optional)] badge: Option<Signal<usize>>) -> impl IntoView {
    view! {
        <a
            href=module.route()
            class="block bg-white shadow rounded-lg p-6 hover:shadow-md transition-shadow"
        >
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-base font-semibold text-gray-900">{module.title()}</h3>
                {badge.map(|count| view! {
                    <Show when=move || { count.get() > 0 }>
                        <span class="rounded-full bg-amber-100 px-2 py-0.5 text-xs font-medium text-amber-800">
                            {move || format!("{} pending", count.get())}
                        </span>
                    </Show>
                })}
            </div>
            <p class="mt-2 text-sm text-gray-600">{module.description()}</p>
        </a>
    }
}
