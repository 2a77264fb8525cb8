pub mod alert_banner;
pub mod expenses;
pub mod incomes;

pub use alert_banner::AlertBanner;
pub use expenses::ExpenseView;
pub use incomes::IncomeView;
