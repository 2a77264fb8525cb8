use std::rc::Rc;

use shared::{Income, IncomeBook, IncomeForm, RecordId, SyncError};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::ApiClient;

const COMPONENT: &str = "income-view";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeEditor {
    pub form: IncomeForm,
    pub edit_target: Option<RecordId>,
}

pub enum IncomeEditorAction {
    SetSource(String),
    SetAmount(String),
    Edit(Income),
    Reset,
}

impl Reducible for IncomeEditor {
    type Action = IncomeEditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            IncomeEditorAction::SetSource(source) => next.form.source = source,
            IncomeEditorAction::SetAmount(amount) => next.form.amount = amount,
            IncomeEditorAction::Edit(income) => {
                next.form = IncomeForm::from_income(&income);
                next.edit_target = Some(income.id);
            }
            IncomeEditorAction::Reset => next = IncomeEditor::default(),
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct IncomeState {
    pub incomes: Vec<Income>,
    pub form: IncomeForm,
    pub edit_target: Option<RecordId>,
    pub loading: bool,
}

pub struct UseIncomesResult {
    pub state: IncomeState,
    pub actions: UseIncomesActions,
}

#[derive(Clone)]
pub struct UseIncomesActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub edit: Callback<Income>,
    pub delete: Callback<RecordId>,
    pub cancel_edit: Callback<()>,
    pub on_source_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
}

fn report(action: &str, error: SyncError) {
    match error {
        // An incomplete form is silently ignored
        SyncError::Validation(e) => log::debug!(target: COMPONENT, "{} skipped: {}", action, e),
        SyncError::Api(e) => log::error!(target: COMPONENT, "{} failed: {}", action, e),
    }
}

#[hook]
pub fn use_incomes(api_client: &ApiClient) -> UseIncomesResult {
    let book = {
        let api_client = api_client.clone();
        use_memo((), move |_| IncomeBook::new(api_client))
    };
    let incomes = use_state(Vec::<Income>::new);
    let loading = use_state(|| true);
    let editor = use_reducer(IncomeEditor::default);

    let refresh = {
        let book = book.clone();
        let incomes = incomes.clone();
        let loading = loading.clone();

        use_callback((), move |_: (), _| {
            let book = book.clone();
            let incomes = incomes.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match book.load().await {
                    Ok(list) => incomes.set(list),
                    Err(e) => report("Fetch incomes", e),
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let submit = {
        let book = book.clone();
        let incomes = incomes.clone();
        let editor = editor.clone();

        Callback::from(move |_| {
            let book = book.clone();
            let incomes = incomes.clone();
            let editor = editor.clone();
            let current = (*incomes).clone();
            let form = editor.form.clone();
            let edit_target = editor.edit_target.clone();

            spawn_local(async move {
                match book.submit(&current, &form, edit_target.as_ref()).await {
                    Ok(next) => {
                        incomes.set(next);
                        editor.dispatch(IncomeEditorAction::Reset);
                    }
                    Err(e) => report("Save income", e),
                }
            });
        })
    };

    let edit = {
        let editor = editor.clone();
        Callback::from(move |income: Income| {
            editor.dispatch(IncomeEditorAction::Edit(income));
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let delete = {
        let book = book.clone();
        let incomes = incomes.clone();

        Callback::from(move |id: RecordId| {
            let book = book.clone();
            let incomes = incomes.clone();
            let current = (*incomes).clone();

            spawn_local(async move {
                match book.delete(&current, &id).await {
                    Ok(next) => incomes.set(next),
                    Err(e) => report("Delete income", e),
                }
            });
        })
    };

    let cancel_edit = {
        let editor = editor.clone();
        Callback::from(move |_| editor.dispatch(IncomeEditorAction::Reset))
    };

    let on_source_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(IncomeEditorAction::SetSource(input.value()));
        })
    };

    let on_amount_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(IncomeEditorAction::SetAmount(input.value()));
        })
    };

    let state = IncomeState {
        incomes: (*incomes).clone(),
        form: editor.form.clone(),
        edit_target: editor.edit_target.clone(),
        loading: *loading,
    };

    let actions = UseIncomesActions {
        refresh,
        submit,
        edit,
        delete,
        cancel_edit,
        on_source_input,
        on_amount_input,
    };

    UseIncomesResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_then_reset() {
        let income = Income {
            id: RecordId::remote("4"),
            source: "Salary".to_string(),
            amount: 30000.0,
        };

        let editor = Rc::new(IncomeEditor::default()).reduce(IncomeEditorAction::Edit(income));
        assert_eq!(editor.edit_target, Some(RecordId::remote("4")));
        assert_eq!(editor.form.amount, "30000");

        let editor = editor.reduce(IncomeEditorAction::SetSource("Bonus".to_string()));
        assert_eq!(editor.form.source, "Bonus");
        assert_eq!(editor.edit_target, Some(RecordId::remote("4")));

        let editor = editor.reduce(IncomeEditorAction::Reset);
        assert_eq!(*editor, IncomeEditor::default());
    }
}
