use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod booking_form;
pub mod components;
pub mod hooks;
pub mod logs;
pub mod outside_click;
pub mod pages;
pub mod state;
pub mod utils;

pub use state::State;

use pages::{BookingsPage, NotFoundPage};

/// Client for the booking backend at [`utils::backend_url`], or the page
/// origin when none was configured.
pub fn get_api_client() -> APIClient {
    let address = utils::backend_url()
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bookings")]
    Bookings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Bookings} /> },
        Route::Bookings => html! { <BookingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
