pub mod balance_card;
pub mod countdown;
pub mod list;
pub mod status_badge;

pub use balance_card::BalanceCard;
pub use countdown::PendingCountdown;
pub use list::LeaveRequestList;
pub use status_badge::LeaveStatusBadge;
