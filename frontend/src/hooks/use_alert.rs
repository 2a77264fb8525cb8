use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::Alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long an alert stays on screen
pub const ALERT_DURATION_MS: u32 = 3000;

/// At most one pending alert. Every `Show` bumps the generation so a timer
/// started for an older alert cannot dismiss a newer one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertState {
    pub current: Option<Alert>,
    generation: u64,
}

pub enum AlertAction {
    Show(Alert),
    Expire(u64),
    Dismiss,
}

impl Reducible for AlertState {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AlertAction::Show(alert) => Rc::new(AlertState {
                current: Some(alert),
                generation: self.generation + 1,
            }),
            AlertAction::Expire(generation) if generation == self.generation => Rc::new(AlertState {
                current: None,
                generation: self.generation,
            }),
            AlertAction::Expire(_) => self,
            AlertAction::Dismiss => Rc::new(AlertState {
                current: None,
                generation: self.generation,
            }),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAlertHandle {
    pub current: Option<Alert>,
    pub show: Callback<Alert>,
    pub dismiss: Callback<()>,
}

#[hook]
pub fn use_alert() -> UseAlertHandle {
    let state = use_reducer(AlertState::default);
    let shown = use_mut_ref(|| 0u64);

    let show = {
        let dispatcher = state.dispatcher();
        use_callback((), move |alert: Alert, _| {
            let generation = {
                let mut shown = shown.borrow_mut();
                *shown += 1;
                *shown
            };
            dispatcher.dispatch(AlertAction::Show(alert));

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                TimeoutFuture::new(ALERT_DURATION_MS).await;
                dispatcher.dispatch(AlertAction::Expire(generation));
            });
        })
    };

    let dismiss = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(AlertAction::Dismiss))
    };

    UseAlertHandle {
        current: state.current.clone(),
        show,
        dismiss,
    }
}
