use std::rc::Rc;

use shared::{Alert, Expense, ExpenseForm, ExpenseSnapshotStore, ExpenseSync, RecordId};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::use_alert::UseAlertHandle;
use crate::services::{ApiClient, AppConfig, ExpenseCache};

const COMPONENT: &str = "expense-view";

/// The expense form plus the record it is editing, if any
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseEditor {
    pub form: ExpenseForm,
    pub edit_target: Option<RecordId>,
}

pub enum EditorAction {
    SetName(String),
    SetAmount(String),
    SetCategory(String),
    SetDate(String),
    Edit(Expense),
    Reset,
}

impl Reducible for ExpenseEditor {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EditorAction::SetName(name) => next.form.name = name,
            EditorAction::SetAmount(amount) => next.form.amount = amount,
            EditorAction::SetCategory(category) => next.form.category = category,
            EditorAction::SetDate(date) => next.form.date = date,
            EditorAction::Edit(expense) => {
                next.form = ExpenseForm::from_expense(&expense);
                next.edit_target = Some(expense.id);
            }
            EditorAction::Reset => next = ExpenseEditor::default(),
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct ExpenseState {
    pub expenses: Vec<Expense>,
    pub form: ExpenseForm,
    pub edit_target: Option<RecordId>,
    pub loading: bool,
    pub submitting: bool,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: UseExpensesActions,
}

#[derive(Clone)]
pub struct UseExpensesActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub edit: Callback<Expense>,
    pub delete: Callback<RecordId>,
    pub cancel_edit: Callback<()>,
    pub on_name_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_category_change: Callback<Event>,
    pub on_date_input: Callback<InputEvent>,
}

#[hook]
pub fn use_expenses(api_client: &ApiClient, config: &AppConfig, alerts: &UseAlertHandle) -> UseExpensesResult {
    let service = {
        let api_client = api_client.clone();
        let cache_key = config.cache_key.clone();
        use_memo((), move |_| ExpenseSync::new(api_client, ExpenseCache::new(cache_key)))
    };
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let submitting = use_state(|| false);
    let editor = use_reducer(ExpenseEditor::default);

    // Load once on mount and follow cache changes made by other views or tabs
    {
        let service = service.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            let subscription = {
                let expenses = expenses.clone();
                service.store().subscribe(Rc::new(move |snapshot: Vec<Expense>| {
                    expenses.set(snapshot);
                }))
            };

            spawn_local(async move {
                let outcome = service.load().await;
                log::debug!(
                    target: COMPONENT,
                    "Loaded {} expenses from {:?}",
                    outcome.expenses.len(),
                    outcome.source
                );
                expenses.set(outcome.expenses);
                loading.set(false);
            });

            move || drop(subscription)
        });
    }

    let refresh = {
        let service = service.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();

        Callback::from(move |_| {
            let service = service.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                let outcome = service.load().await;
                expenses.set(outcome.expenses);
                loading.set(false);
            });
        })
    };

    let submit = {
        let service = service.clone();
        let expenses = expenses.clone();
        let submitting = submitting.clone();
        let editor = editor.clone();
        let show_alert = alerts.show.clone();

        Callback::from(move |_| {
            let service = service.clone();
            let expenses = expenses.clone();
            let submitting = submitting.clone();
            let editor = editor.clone();
            let show_alert = show_alert.clone();
            let form = editor.form.clone();
            let edit_target = editor.edit_target.clone();

            spawn_local(async move {
                submitting.set(true);

                match service.submit(&form, edit_target.as_ref()).await {
                    Ok(outcome) => {
                        log::info!(
                            target: COMPONENT,
                            "{} ({:?}, {} expenses)",
                            outcome.alert.message,
                            outcome.source,
                            outcome.expenses.len()
                        );
                        expenses.set(outcome.expenses);
                        editor.dispatch(EditorAction::Reset);
                        show_alert.emit(outcome.alert);
                    }
                    Err(e) => {
                        log::debug!(target: COMPONENT, "Rejected expense form: {:?}", e);
                        show_alert.emit(Alert::error(e.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let edit = {
        let editor = editor.clone();
        Callback::from(move |expense: Expense| {
            editor.dispatch(EditorAction::Edit(expense));
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let delete = {
        let service = service.clone();
        let expenses = expenses.clone();
        let show_alert = alerts.show.clone();

        Callback::from(move |id: RecordId| {
            let service = service.clone();
            let expenses = expenses.clone();
            let show_alert = show_alert.clone();

            spawn_local(async move {
                let outcome = service.delete(&id).await;
                log::info!(target: COMPONENT, "{} ({:?})", outcome.alert.message, outcome.source);
                expenses.set(outcome.expenses);
                show_alert.emit(outcome.alert);
            });
        })
    };

    let cancel_edit = {
        let editor = editor.clone();
        Callback::from(move |_| editor.dispatch(EditorAction::Reset))
    };

    let on_name_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(EditorAction::SetName(input.value()));
        })
    };

    let on_amount_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(EditorAction::SetAmount(input.value()));
        })
    };

    let on_category_change = {
        let editor = editor.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            editor.dispatch(EditorAction::SetCategory(select.value()));
        })
    };

    let on_date_input = {
        let editor = editor.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.dispatch(EditorAction::SetDate(input.value()));
        })
    };

    let state = ExpenseState {
        expenses: (*expenses).clone(),
        form: editor.form.clone(),
        edit_target: editor.edit_target.clone(),
        loading: *loading,
        submitting: *submitting,
    };

    let actions = UseExpensesActions {
        refresh,
        submit,
        edit,
        delete,
        cancel_edit,
        on_name_input,
        on_amount_input,
        on_category_change,
        on_date_input,
    };

    UseExpensesResult { state, actions }
}
