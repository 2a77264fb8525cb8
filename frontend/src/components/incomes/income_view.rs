use shared::{format_amount, total_amount};
use yew::prelude::*;

use super::{IncomeEntryForm, IncomeTable};
use crate::hooks::use_incomes;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct IncomeViewProps {
    pub api_client: ApiClient,
}

#[function_component(IncomeView)]
pub fn income_view(props: &IncomeViewProps) -> Html {
    let incomes = use_incomes(&props.api_client);
    let state = &incomes.state;
    let actions = &incomes.actions;

    let total = use_memo(state.incomes.clone(), |incomes| total_amount(incomes));

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <section class="income-view">
            <div class="view-header">
                <h2>{"Income Tracker"}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_refresh} disabled={state.loading}>
                    {if state.loading { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>

            <IncomeEntryForm
                form={state.form.clone()}
                editing={state.edit_target.is_some()}
                on_source_input={actions.on_source_input.clone()}
                on_amount_input={actions.on_amount_input.clone()}
                on_submit={actions.submit.clone()}
                on_cancel={actions.cancel_edit.clone()}
            />

            <IncomeTable
                incomes={state.incomes.clone()}
                on_edit={actions.edit.clone()}
                on_delete={actions.delete.clone()}
            />

            <div class="total">
                <strong>{format!("Total Income: ₹ {}", format_amount(*total))}</strong>
            </div>
        </section>
    }
}
