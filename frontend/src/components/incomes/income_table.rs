use shared::{format_amount, Income, RecordId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncomeTableProps {
    pub incomes: Vec<Income>,
    pub on_edit: Callback<Income>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(IncomeTable)]
pub fn income_table(props: &IncomeTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="incomes-table">
                <thead>
                    <tr>
                        <th>{"Source"}</th>
                        <th>{"Amount (₹)"}</th>
                        <th>{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.incomes.iter().map(|income| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let income = income.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(income.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let id = income.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };

                        html! {
                            <tr key={income.id.to_string()}>
                                <td class="source">{&income.source}</td>
                                <td class="amount">{format_amount(income.amount)}</td>
                                <td class="actions">
                                    <button type="button" class="btn btn-small" onclick={on_edit}>{"Edit"}</button>
                                    <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
