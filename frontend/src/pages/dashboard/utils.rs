use crate::api::{DashboardConfig, DashboardConfigUpdate, DashboardData};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DashboardModule {
    Profile,
    Attendance,
    Leave,
    Payroll,
    Learning,
    Career,
    Wellness,
    Compliance,
}

impl DashboardModule {
    pub const ALL: [DashboardModule; 8] = [
        DashboardModule::Profile,
        DashboardModule::Attendance,
        DashboardModule::Leave,
        DashboardModule::Payroll,
        DashboardModule::Learning,
        DashboardModule::Career,
        DashboardModule::Wellness,
        DashboardModule::Compliance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardModule::Profile => "My Profile",
            DashboardModule::Attendance => "Attendance",
            DashboardModule::Leave => "Leave Management",
            DashboardModule::Payroll => "Payroll & Compensation",
            DashboardModule::Learning => "Learning & Certifications",
            DashboardModule::Career => "Career Growth & Development",
            DashboardModule::Wellness => "Wellness & Engagement",
            DashboardModule::Compliance => "Compliance & Policies",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DashboardModule::Profile => "View and update your profile",
            DashboardModule::Attendance => "View attendance and timesheets",
            DashboardModule::Leave => "Apply and track leave requests",
            DashboardModule::Payroll => "Payslips and compensation",
            DashboardModule::Learning => "Courses and certifications",
            DashboardModule::Career => "Goals and development plans",
            DashboardModule::Wellness => "Wellness programs and engagement",
            DashboardModule::Compliance => "Policies and compliance tasks",
        }
    }

    pub fn route(&self) -> &'static str {
        match self {
            DashboardModule::Profile => "/profile",
            DashboardModule::Attendance => "/attendance",
            DashboardModule::Leave => "/leave",
            DashboardModule::Payroll => "/payroll",
            DashboardModule::Learning => "/learning",
            DashboardModule::Career => "/career",
            DashboardModule::Wellness => "/wellness",
            DashboardModule::Compliance => "/compliance",
        }
    }

    pub fn is_visible(&self, config: &DashboardConfig) -> bool {
        match self {
            DashboardModule::Profile => config.show_profile,
            DashboardModule::Attendance => config.show_attendance,
            DashboardModule::Leave => config.show_leaves,
            DashboardModule::Payroll => config.show_payroll,
            DashboardModule::Learning => config.show_learning,
            DashboardModule::Career => config.show_career,
            DashboardModule::Wellness => config.show_wellness,
            DashboardModule::Compliance => config.show_compliance,
        }
    }

    /// A config update carrying only this module's flag.
    pub fn visibility_update(&self, visible: bool) -> DashboardConfigUpdate {
        let mut update = DashboardConfigUpdate::default();
        let flag = match self {
            DashboardModule::Profile => &mut update.show_profile,
            DashboardModule::Attendance => &mut update.show_attendance,
            DashboardModule::Leave => &mut update.show_leaves,
            DashboardModule::Payroll => &mut update.show_payroll,
            DashboardModule::Learning => &mut update.show_learning,
            DashboardModule::Career => &mut update.show_career,
            DashboardModule::Wellness => &mut update.show_wellness,
            DashboardModule::Compliance => &mut update.show_compliance,
        };
        *flag = Some(visible);
        update
    }
}

/// Modules to show. Without a config (loading or failed) everything is shown.
pub fn visible_modules(config: Option<&DashboardConfig>) -> Vec<DashboardModule> {
    DashboardModule::ALL
        .into_iter()
        .filter(|module| config.map_or(true, |config| module.is_visible(config)))
        .collect()
}

pub fn pending_leave_count(data: &DashboardData) -> usize {
    data.leave_requests.iter().filter(|r| r.is_pending()).count()
}
