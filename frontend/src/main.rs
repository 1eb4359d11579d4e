use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod pages {
    pub mod landing;
    pub mod sponsors;
}
mod register {
    pub mod form;
    pub mod storage;
    pub mod steps;
    pub mod wizard;
}

use pages::{
    landing::Landing,
    sponsors::Sponsors,
};
use register::wizard::RegistrationExperience;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sponsors")]
    Sponsors,
    #[at("/register")]
    Register,
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
        Route::Sponsors => {
            info!("Rendering Sponsors page");
            html! { <Sponsors /> }
        },
        Route::Register => {
            info!("Rendering Register page");
            html! { <RegistrationExperience /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the hackathon"}</Link<Route>>
                </div>
            }
        },
    }
}

const NAV_ANCHORS: [(&str, &str); 3] = [
    ("Manifesto", "/#manifesto"),
    ("Tracks", "/#tracks"),
    ("Timeline", "/#details"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    // past the hero
    let is_scrolled = scroll_y > viewport_height * 0.9;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
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
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"IRH '25"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ANCHORS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Sponsors} classes="nav-link">
                            {"Sponsors"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Register} classes="nav-register-button">
                            {"Register"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 2rem;
                    box-sizing: border-box;
                    color: white;
                    mix-blend-mode: difference;
                    transition: background 0.3s ease, padding 0.3s ease;
                    animation: navIn 1.5s cubic-bezier(0.16, 1, 0.3, 1) 1s both;
                }
                @keyframes navIn {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: none; opacity: 1; }
                }
                .top-nav.scrolled {
                    mix-blend-mode: normal;
                    padding: 1rem 2rem;
                    background: rgba(5, 5, 5, 0.85);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-family: serif;
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: white;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .nav-link {
                    color: white;
                    text-decoration: none;
                }
                .nav-link:hover { color: #9ca3af; }
                .nav-register-button {
                    padding: 0.5rem 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    color: white;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-register-button:hover { background: white; color: black; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: white;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 2rem;
                        background: rgba(5, 5, 5, 0.95);
                    }
                }
                "#}
            </style>
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
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
