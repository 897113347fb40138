use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks {
    pub mod overlay;
    pub mod visible;
}
mod components {
    pub mod around_card;
    pub mod down_arrow;
    pub mod fullscreen_image;
    pub mod header;
    pub mod hero;
    pub mod mobile_reservation_button;
    pub mod mobile_video_button;
    pub mod reservation_button;
    pub mod video;
    pub mod video_button;
    pub mod video_screen;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter basename={config::basename()}>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, base path {}", config::base_path());
    yew::Renderer::<App>::new().render();
}
