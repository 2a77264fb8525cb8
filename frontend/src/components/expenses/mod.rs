pub mod category_chart;
pub mod expense_form;
pub mod expense_table;
pub mod expense_view;

pub use category_chart::CategoryChart;
pub use expense_form::ExpenseEntryForm;
pub use expense_table::ExpenseTable;
pub use expense_view::ExpenseView;
