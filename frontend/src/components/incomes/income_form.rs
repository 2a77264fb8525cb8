use shared::IncomeForm;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IncomeEntryFormProps {
    pub form: IncomeForm,
    pub editing: bool,

    pub on_source_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(IncomeEntryForm)]
pub fn income_entry_form(props: &IncomeEntryFormProps) -> Html {
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
        <form class="income-form" {onsubmit}>
            <div class="form-group">
                <label for="income-source">{"Source"}</label>
                <input
                    type="text"
                    id="income-source"
                    placeholder="Salary, freelance, interest..."
                    value={props.form.source.clone()}
                    oninput={props.on_source_input.clone()}
                />
            </div>

            <div class="form-group">
                <label for="income-amount">{"Amount (₹)"}</label>
                <input
                    type="number"
                    id="income-amount"
                    placeholder="0.00"
                    step="0.01"
                    value={props.form.amount.clone()}
                    oninput={props.on_amount_input.clone()}
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">
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
