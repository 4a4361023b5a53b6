pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod notify;
pub mod pages;
pub mod session;
pub mod styles;

use shared::shared_prediction_game::GameKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    account::Account,
    lobby::Lobby,
    login::Login,
    not_found::NotFound,
    room_detail::RoomDetailPage,
    room_list::RoomListPage,
};
use crate::session::SessionProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/account")]
    Account,
    #[at("/games/:game")]
    Rooms { game: String },
    #[at("/games/:game/rooms/:id")]
    Room { game: String, id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <div class="min-h-screen w-full">
                    <Switch<Route> render={switch} />
                </div>
            </SessionProvider>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Lobby /> },
        Route::Login => html! { <Login /> },
        Route::Account => html! { <Account /> },
        // Keyed by game so switching families starts from a fresh list.
        Route::Rooms { game } => match GameKind::from_slug(&game) {
            Some(kind) => html! { <RoomListPage key={game} {kind} /> },
            None => html! { <NotFound /> },
        },
        Route::Room { game, id } => match GameKind::from_slug(&game) {
            Some(kind) => html! { <RoomDetailPage key={format!("{}/{}", game, id)} {kind} room_id={id.clone()} /> },
            None => html! { <NotFound /> },
        },
        Route::NotFound => html! { <NotFound /> },
    }
}
