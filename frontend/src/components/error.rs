use crate::api::ApiError;
use leptos::*;

/// Inline error banner with a close button and, when `on_retry` is given,
/// a retry button. Renders nothing while `error` is `None`.
#[component]
pub fn DismissibleError(
    error: Signal<Option<ApiError>>,
    on_dismiss: Callback<()>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional, into)] retry_disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                role="alert"
                class="bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded my-2 flex items-start justify-between gap-3"
            >
                <div class="space-y-1">
                    <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                    {move || {
                        error
                            .get()
                            .filter(|e| !e.code.is_empty() && e.code != "UNKNOWN")
                            .map(|e| view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> })
                    }}
                </div>
                <div class="flex items-center gap-2">
                    {on_retry.map(|retry| view! {
                        <button
                            type="button"
                            class="text-sm font-medium underline disabled:opacity-50"
                            disabled=move || retry_disabled.get()
                            on:click=move |_| retry.call(())
                        >
                            "Retry"
                        </button>
                    })}
                    <button
                        type="button"
                        aria-label="Dismiss"
                        class="text-red-700 hover:text-red-900"
                        on:click=move |_| on_dismiss.call(())
                    >
                        {"✕"}
                    </button>
                </div>
            </div>
        </Show>
    }
}
