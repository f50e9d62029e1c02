use crate::components::layout::{BackToDashboard, Layout};
use leptos::*;

#[component]
pub fn LeaveLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <BackToDashboard />
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{"Leave Management"}</h1>
                    <p class="mt-1 text-sm text-gray-600">
                        {"Track your leave requests and balance. Pending requests are approved automatically after five minutes."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
