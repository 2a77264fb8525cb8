pub mod income_form;
pub mod income_table;
pub mod income_view;

pub use income_form::IncomeEntryForm;
pub use income_table::IncomeTable;
pub use income_view::IncomeView;
