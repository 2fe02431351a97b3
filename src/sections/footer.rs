use chrono::Datelike;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::marquee::Marquee;
use crate::config;
use crate::contact::mailto_link;
use crate::content::{NAV_ITEMS, STUDIO_NAME};
use crate::{section_href, Route};

const SIGN_OFF: &[&str] = &["Let's make something", "Say hello", "Start a project"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <a href={section_href("contact")} class="footer-marquee-link">
                <Marquee items={SIGN_OFF} duration={25.0} reverse={true} separator="→" />
            </a>
            <div class="footer-grid">
                <div>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {STUDIO_NAME}<span class="nav-logo-dot">{"."}</span>
                    </Link<Route>>
                    <p class="footer-note">{"Independent creative studio. Working worldwide from Helsinki."}</p>
                </div>
                <nav class="footer-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.id} href={section_href(item.id)}>{item.label}</a>
                    }) }
                </nav>
                <div class="footer-links">
                    <a href={mailto_link("Hello")}>{config::CONTACT_EMAIL}</a>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                </div>
            </div>
            <p class="footer-legal">{format!("© {} {} Studio. All rights reserved.", year, STUDIO_NAME)}</p>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 0 2rem 2rem;
                        margin-top: 6rem;
                    }
                    .footer-marquee-link {
                        display: block;
                        padding: 3rem 0;
                        color: #fff;
                        text-decoration: none;
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        font-weight: 700;
                        letter-spacing: -0.03em;
                    }
                    .footer-marquee-link:hover { color: #a993ff; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .footer-note { color: #777; max-width: 320px; }
                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                    }
                    .footer-links a {
                        color: #999;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-links a:hover { color: #fff; }
                    .footer-legal {
                        max-width: 1100px;
                        margin: 3rem auto 0;
                        color: #555;
                        font-size: 0.85rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </footer>
    }
}
