use shared::Alert;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertBannerProps {
    pub alert: Option<Alert>,
    pub on_dismiss: Callback<()>,
}

/// Transient notification pinned to the top of the view
#[function_component(AlertBanner)]
pub fn alert_banner(props: &AlertBannerProps) -> Html {
    let Some(alert) = props.alert.as_ref() else {
        return html! {};
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("alert-banner", alert.severity.css_class())} role="alert">
            <span class="alert-message">{&alert.message}</span>
            <button type="button" class="alert-close" onclick={on_dismiss} title="Dismiss">
                {"×"}
            </button>
        </div>
    }
}
