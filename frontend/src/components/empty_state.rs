use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-300 bg-gray-50">
            <h3 class="text-sm font-semibold text-gray-900">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-gray-500">{desc}</p> })}
        </div>
    }
}
