use shared::{ExpenseCategory, ExpenseForm};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseEntryFormProps {
    pub form: ExpenseForm,
    pub editing: bool,
    pub submitting: bool,

    pub on_name_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_category_change: Callback<Event>,
    pub on_date_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseEntryForm)]
pub fn expense_entry_form(props: &ExpenseEntryFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="expense-form" {onsubmit}>
            <div class="form-group">
                <label for="expense-name">{"Name"}</label>
                <input
                    type="text"
                    id="expense-name"
                    placeholder="Groceries, rent, bus pass..."
                    value={props.form.name.clone()}
                    oninput={props.on_name_input.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="expense-amount">{"Amount (₹)"}</label>
                <input
                    type="number"
                    id="expense-amount"
                    placeholder="0.00"
                    step="0.01"
                    value={props.form.amount.clone()}
                    oninput={props.on_amount_input.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-group">
                <label for="expense-category">{"Category"}</label>
                <select
                    id="expense-category"
                    onchange={props.on_category_change.clone()}
                    disabled={props.submitting}
                >
                    <option value="" selected={props.form.category.is_empty()}>
                        {"Select category"}
                    </option>
                    {for ExpenseCategory::ALL.iter().map(|category| {
                        html! {
                            <option
                                value={category.label()}
                                selected={props.form.category == category.label()}
                            >
                                {category.label()}
                            </option>
                        }
                    })}
                </select>
            </div>

            <div class="form-group">
                <label for="expense-date">{"Date"}</label>
                <input
                    type="date"
                    id="expense-date"
                    value={props.form.date.clone()}
                    oninput={props.on_date_input.clone()}
                    disabled={props.submitting}
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.editing { "Update" } else { "Add" }}
                </button>
                {if props.editing {
                    html! {
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                    }
                } else { html! {} }}
            </div>
        </form>
    }
}
