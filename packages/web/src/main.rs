use dioxus::prelude::*;

use store::ClientConfig;
use ui::{EntitlementProvider, SessionProvider};
use views::{DashboardLayout, Home, Login, NotFound, ProjectDetail, Projects, Register, Subscription};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/projects")]
            Projects {},
            #[route("/projects/:id")]
            ProjectDetail { id: String },
            #[route("/subscription")]
            Subscription {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Client configuration baked in at build time.
const CONFIG_TOML: &str = include_str!("../taskboard.toml");

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}, using defaults", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        SessionProvider {
            config,
            EntitlementProvider {
                Router::<Route> {}
            }
        }
    }
}
