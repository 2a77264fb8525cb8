use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ExpenseView, IncomeView};
use services::{ApiClient, AppConfig, Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.clone(), ApiClient::new);

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Finance Tracker"}</h1>
            </header>
            <main class="trackers">
                <ExpenseView api_client={(*api_client).clone()} config={props.config.clone()} />
                <IncomeView api_client={(*api_client).clone()} />
            </main>
        </div>
    }
}

fn main() {
    let config = AppConfig::from_build_env();

    if let Err(e) = Logger::init(config.log_level) {
        gloo::console::error!("Failed to install logger:", e.to_string());
    }
    Logger::info_with_component("app", &format!("Using API at {}", config.api_url));

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
