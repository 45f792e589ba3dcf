//! Root application component with routing and the server-rendered shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::pages::{contact::ContactPage, faq::FaqPage};

const RECAPTCHA_SCRIPT: &str = "https://www.google.com/recaptcha/api.js";

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is published as `window.FAQ_CONFIG` ahead of the hydration
/// scripts so the client reads the same values the server rendered with.
pub fn shell(options: LeptosOptions, config: SiteConfig) -> impl IntoView {
    let global = config.to_global_script();
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=global></script>
                <script src=RECAPTCHA_SCRIPT async="" defer=""></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// On the server the config arrives through context; in the browser it is
/// read from the global object written by [`shell`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_window);
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/contacto.css"/>
        <Title text="Contacto"/>

        <Router>
            <main class="site-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("") view=ContactPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                </Routes>
            </main>
        </Router>
    }
}
