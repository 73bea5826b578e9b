use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod controller;
mod dom;
mod hooks;
mod pages {
    pub mod home;
}
mod components {
    pub mod toaster;
}

use pages::home::Home;
use components::toaster::ToastProvider;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        // single-page site: anything else lands on the home page too
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let basename = config::get_route_basename().map(AttrValue::from);

    html! {
        <ToastProvider>
            <BrowserRouter {basename}>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
