use crate::api::LeaveStatus;
use leptos::*;

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-amber-100 text-amber-800",
        LeaveStatus::Approved => "bg-green-100 text-green-800",
        LeaveStatus::Rejected => "bg-red-100 text-red-800",
    }
}

#[component]
pub fn LeaveStatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            status_badge_class(status),
        )>
            {status.as_str()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_class_per_status() {
        assert!(status_badge_class(LeaveStatus::Approved).contains("green"));
        assert!(status_badge_class(LeaveStatus::Rejected).contains("red"));
        assert!(status_badge_class(LeaveStatus::Pending).contains("amber"));
    }
}
