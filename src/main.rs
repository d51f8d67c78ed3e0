use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};

mod config;
mod viewport {
    pub mod dom;
    pub mod error;
    pub mod reveal;
    pub mod section_tracker;
    pub mod subscription;
}
mod components {
    pub mod legal_document;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}
mod auth {
    pub mod login;
}

use pages::{
    landing::Landing,
    termsprivacy::{TermsAndConditions, PrivacyPolicy},
};
use auth::login::Login;
use viewport::subscription::listen_window_scroll;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; color: #fff;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Take me home"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let update = move || {
                let scroll_y = web_sys::window()
                    .and_then(|window| window.scroll_y().ok())
                    .unwrap_or(0.0);
                is_scrolled.set(scroll_y > config::NAV_SCROLLED_AFTER_PX);
            };
            update();

            let subscription = listen_window_scroll(update)
                .map_err(|err| warn!("nav will not react to scrolling: {}", err))
                .ok();

            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        // No prevent_default here, the wrapped Link does its own navigation
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 10;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.95);
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.3);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }
                .nav-logo {
                    color: #fff;
                    font-size: 1.5rem;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link, .nav-login-button {
                    color: #fff;
                    text-decoration: none;
                }
                .nav-login-button {
                    border: 1px solid #1E90FF;
                    border-radius: 8px;
                    padding: 0.5rem 1.25rem;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        padding: 1rem 0;
                        background: rgba(26, 26, 26, 0.95);
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"brand"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Terms} classes="nav-link">
                            {"Terms"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Privacy} classes="nav-link">
                            {"Privacy"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Login} classes="nav-login-button">
                            {"Login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
