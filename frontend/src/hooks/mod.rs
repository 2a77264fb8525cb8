pub mod use_alert;
pub mod use_expenses;
pub mod use_incomes;

pub use use_alert::{use_alert, UseAlertHandle};
pub use use_expenses::use_expenses;
pub use use_incomes::use_incomes;
