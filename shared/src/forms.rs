use std::fmt;

use crate::{date_only, Expense, ExpenseCategory, ExpensePayload, Income, IncomePayload, ValidationError};

/// Editable field of either form, used to report which one is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Amount,
    Category,
    Date,
    Source,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Amount => "amount",
            FormField::Category => "category",
            FormField::Date => "date",
            FormField::Source => "source",
        };
        f.write_str(label)
    }
}

/// Raw text of the expense form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseForm {
    /// Prefill the form from an existing record for editing
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: format_input_amount(expense.amount),
            category: expense.category.label().to_string(),
            date: date_only(&expense.date).to_string(),
        }
    }

    /// All four fields are required; the amount must be a number and the
    /// category one of [`ExpenseCategory::ALL`].
    pub fn validate(&self) -> Result<ExpensePayload, ValidationError> {
        let name = required(&self.name, FormField::Name)?;
        let amount = required(&self.amount, FormField::Amount)?;
        let category = required(&self.category, FormField::Category)?;
        let date = required(&self.date, FormField::Date)?;

        Ok(ExpensePayload {
            name: name.to_string(),
            amount: parse_amount(amount)?,
            category: category.parse::<ExpenseCategory>()?,
            date: date.to_string(),
        })
    }
}

/// Raw text of the income form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeForm {
    pub source: String,
    pub amount: String,
}

impl IncomeForm {
    pub fn from_income(income: &Income) -> Self {
        Self {
            source: income.source.clone(),
            amount: format_input_amount(income.amount),
        }
    }

    pub fn validate(&self) -> Result<IncomePayload, ValidationError> {
        let source = required(&self.source, FormField::Source)?;
        let amount = required(&self.amount, FormField::Amount)?;

        Ok(IncomePayload {
            source: source.to_string(),
            amount: parse_amount(amount)?,
        })
    }
}

/// Blank means empty after trimming; the value itself is kept as typed
fn required(value: &str, field: FormField) -> Result<&str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidAmount(raw.to_string())),
    }
}

fn format_input_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordId;

    fn coffee_form() -> ExpenseForm {
        ExpenseForm {
            name: "Coffee".to_string(),
            amount: "50".to_string(),
            category: "Food".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_valid_expense_form() {
        let payload = coffee_form().validate().unwrap();
        assert_eq!(payload.name, "Coffee");
        assert_eq!(payload.amount, 50.0);
        assert_eq!(payload.category, ExpenseCategory::Food);
        assert_eq!(payload.date, "2024-01-01");
    }

    #[test]
    fn test_each_expense_field_is_required() {
        let cases = [
            (ExpenseForm { name: String::new(), ..coffee_form() }, FormField::Name),
            (ExpenseForm { amount: String::new(), ..coffee_form() }, FormField::Amount),
            (ExpenseForm { category: String::new(), ..coffee_form() }, FormField::Category),
            (ExpenseForm { date: "   ".to_string(), ..coffee_form() }, FormField::Date),
        ];

        for (form, field) in cases {
            assert_eq!(form.validate(), Err(ValidationError::MissingField(field)));
        }
    }

    #[test]
    fn test_text_fields_are_sent_as_typed() {
        let form = ExpenseForm {
            name: "  Coffee ".to_string(),
            amount: " 50 ".to_string(),
            ..coffee_form()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "  Coffee ");
        assert_eq!(payload.amount, 50.0);

        let income = IncomeForm { source: "Salary ".to_string(), amount: "10".to_string() };
        assert_eq!(income.validate().unwrap().source, "Salary ");
    }

    #[test]
    fn test_missing_field_message() {
        let form = ExpenseForm { amount: String::new(), ..coffee_form() };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Please fill all fields");
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let form = ExpenseForm { amount: "fifty".to_string(), ..coffee_form() };
        assert_eq!(form.validate(), Err(ValidationError::InvalidAmount("fifty".to_string())));

        let form = ExpenseForm { amount: "inf".to_string(), ..coffee_form() };
        assert!(matches!(form.validate(), Err(ValidationError::InvalidAmount(_))));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let form = ExpenseForm { category: "Snacks".to_string(), ..coffee_form() };
        assert_eq!(form.validate(), Err(ValidationError::UnknownCategory("Snacks".to_string())));
    }

    #[test]
    fn test_from_expense_truncates_date() {
        let expense = Expense {
            id: RecordId::remote("1"),
            name: "Rent".to_string(),
            amount: 1200.5,
            category: ExpenseCategory::Rent,
            date: "2024-05-01T00:00:00.000Z".to_string(),
        };

        let form = ExpenseForm::from_expense(&expense);
        assert_eq!(form.date, "2024-05-01");
        assert_eq!(form.amount, "1200.5");
        assert_eq!(form.category, "Rent");
    }

    #[test]
    fn test_income_form() {
        let form = IncomeForm {
            source: "Salary".to_string(),
            amount: "30000".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.source, "Salary");
        assert_eq!(payload.amount, 30000.0);

        let blank = IncomeForm { source: "Salary".to_string(), amount: String::new() };
        assert_eq!(blank.validate(), Err(ValidationError::MissingField(FormField::Amount)));
    }

    #[test]
    fn test_income_form_roundtrips_whole_amounts() {
        let income = Income {
            id: RecordId::remote("3"),
            source: "Freelancing".to_string(),
            amount: 4500.0,
        };
        assert_eq!(IncomeForm::from_income(&income).amount, "4500");
    }
}
