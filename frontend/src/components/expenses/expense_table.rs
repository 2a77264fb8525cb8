use shared::{format_amount, Expense, RecordId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<Expense>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    if props.loading && props.expenses.is_empty() {
        return html! { <div class="loading">{"Loading expenses..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="expenses-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Amount (₹)"}</th>
                        <th>{"Category"}</th>
                        <th>{"Date"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.expenses.is_empty() {
                        html! {
                            <tr>
                                <td colspan="5" class="empty">{"No expenses yet."}</td>
                            </tr>
                        }
                    } else {
                        props.expenses.iter().map(|expense| expense_row(props, expense)).collect::<Html>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn expense_row(props: &ExpenseTableProps, expense: &Expense) -> Html {
    let on_edit = {
        let on_edit = props.on_edit.clone();
        let expense = expense.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = expense.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <tr key={expense.id.to_string()}>
            <td class="name">
                {&expense.name}
                {if expense.id.is_local() {
                    html! { <span class="unsynced" title="Saved on this device only">{"unsynced"}</span> }
                } else { html! {} }}
            </td>
            <td class="amount">{format_amount(expense.amount)}</td>
            <td class="category">{expense.category.label()}</td>
            <td class="date">{expense.date_only()}</td>
            <td class="actions">
                <button type="button" class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}
