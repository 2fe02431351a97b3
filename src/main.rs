use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod motion;
mod components {
    pub mod animated_counter;
    pub mod magnetic;
    pub mod marquee;
    pub mod notification;
    pub mod parallax;
    pub mod reveal;
}
mod sections {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod portfolio;
    pub mod process;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod project;
    pub mod termsprivacy;
}

use components::magnetic::Magnetic;
use content::{NAV_ITEMS, STUDIO_NAME};
use pages::{
    home::Home,
    not_found::NotFound,
    project::ProjectDetail,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};
use sections::footer::Footer;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[at("/project/:id")]
    Project { id: String },
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
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Project { id } => {
            info!("Rendering Project page for {}", id);
            html! { <ProjectDetail {id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Scroll depth in px after which the nav gets its solid background.
const NAV_SCROLLED_AFTER: f64 = 40.0;

fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER
}

fn window_is_scrolled() -> bool {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .map_or(false, nav_is_scrolled)
}

/// Home page anchor, usable from any route.
pub fn section_href(id: &str) -> String {
    format!("/#{}", id)
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    // A reload can land mid-page, before any scroll event.
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                is_scrolled.set(window_is_scrolled());
                || ()
            },
            (),
        );
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(window_is_scrolled());
        });
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
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {STUDIO_NAME}<span class="nav-logo-dot">{"."}</span>
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then_some("open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().filter(|item| item.id != "contact").map(|item| html! {
                        <a key={item.id} href={section_href(item.id)} class="nav-link" onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    <Magnetic strength={0.25}>
                        <a href={section_href("contact")} class="nav-cta" onclick={close_menu.clone()}>
                            {"Start a project"}
                        </a>
                    </Magnetic>
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
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} site", STUDIO_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [
            Route::Home,
            Route::Privacy,
            Route::Terms,
            Route::Project { id: "aurora-bank".to_string() },
        ] {
            assert_eq!(Route::recognize(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn every_project_has_a_route() {
        for project in content::PROJECTS {
            let path = Route::Project { id: project.id.to_string() }.to_path();
            assert_eq!(path, format!("/project/{}", project.id));
            assert_eq!(
                Route::recognize(&path),
                Some(Route::Project { id: project.id.to_string() })
            );
        }
    }

    #[test]
    fn not_found_is_the_fallback_route() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn nav_turns_solid_past_the_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(NAV_SCROLLED_AFTER));
        assert!(nav_is_scrolled(NAV_SCROLLED_AFTER + 1.0));
    }

    #[test]
    fn section_links_point_at_the_home_page() {
        assert_eq!(section_href("work"), "/#work");
    }
}
