use shared::{category_totals, format_amount, total_amount};
use yew::prelude::*;

use super::{CategoryChart, ExpenseEntryForm, ExpenseTable};
use crate::components::AlertBanner;
use crate::hooks::{use_alert, use_expenses};
use crate::services::{ApiClient, AppConfig};

#[derive(Properties, PartialEq)]
pub struct ExpenseViewProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
}

#[function_component(ExpenseView)]
pub fn expense_view(props: &ExpenseViewProps) -> Html {
    let alerts = use_alert();
    let expenses = use_expenses(&props.api_client, &props.config, &alerts);
    let state = &expenses.state;
    let actions = &expenses.actions;

    let total = use_memo(state.expenses.clone(), |expenses| total_amount(expenses));
    let totals = use_memo(state.expenses.clone(), |expenses| category_totals(expenses));

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <section class="expense-view">
            <AlertBanner alert={alerts.current.clone()} on_dismiss={alerts.dismiss.clone()} />

            <div class="view-header">
                <h2>{"Expense Tracker"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_refresh} disabled={state.loading}>
                    {if state.loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <ExpenseEntryForm
                form={state.form.clone()}
                editing={state.edit_target.is_some()}
                submitting={state.submitting}
                on_name_input={actions.on_name_input.clone()}
                on_amount_input={actions.on_amount_input.clone()}
                on_category_change={actions.on_category_change.clone()}
                on_date_input={actions.on_date_input.clone()}
                on_submit={actions.submit.clone()}
                on_cancel={actions.cancel_edit.clone()}
            />

            <ExpenseTable
                expenses={state.expenses.clone()}
                loading={state.loading}
                on_edit={actions.edit.clone()}
                on_delete={actions.delete.clone()}
            />

            <div class="total">
                <strong>{format!("Total Expenses: ₹{}", format_amount(*total))}</strong>
            </div>

            <CategoryChart totals={(*totals).clone()} />
        </section>
    }
}
