use log::{info, warn, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod i18n;
mod images;
mod selector;
mod stats;
mod components {
    pub mod action_card;
    pub mod button_link;
    pub mod callout_banner;
    pub mod code_modal;
    pub mod codeblock;
    pub mod morpher;
    pub mod page_metadata;
    pub mod stats_box_grid;
    pub mod title_card_list;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use i18n::{Locale, Translate, Translator};
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:lang")]
    LocalizedHome { lang: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Unknown language codes render the default locale instead of a 404.
pub fn locale_for_route(lang: &str) -> Locale {
    Locale::from_code(lang).unwrap_or_else(|| {
        warn!("Unsupported language '{}', using {}", lang, config::DEFAULT_LOCALE.code());
        config::DEFAULT_LOCALE
    })
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home locale={config::DEFAULT_LOCALE} /> }
        }
        Route::LocalizedHome { lang } => {
            let locale = locale_for_route(&lang);
            info!("Rendering Home page ({})", locale.code());
            html! { <Home {locale} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn current_locale(route: Option<Route>) -> Locale {
    match route {
        Some(Route::LocalizedHome { lang }) => Locale::from_code(&lang).unwrap_or(config::DEFAULT_LOCALE),
        _ => config::DEFAULT_LOCALE,
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let locale = current_locale(use_route::<Route>());
    let t = Translator::new(locale);
    let menu_open = use_state(|| false);

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
        "language-menu open"
    } else {
        "language-menu"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::LocalizedHome { lang: locale.code().to_string() }} classes="nav-logo">
                    {t.translate("site-title")}
                </Link<Route>>
                <button class="language-toggle" onclick={toggle_menu}>
                    {t.translate("nav-languages")}
                </button>
                <div class={menu_class}>
                    { for Locale::ALL.iter().map(|option| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route>
                                to={Route::LocalizedHome { lang: option.code().to_string() }}
                                classes={classes!("language-link", (*option == locale).then(|| "active"))}
                            >
                                {option.native_name()}
                            </Link<Route>>
                        </div>
                    }) }
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

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_for_route() {
        assert_eq!(locale_for_route("es"), Locale::Es);
        assert_eq!(locale_for_route("ar"), Locale::Ar);
        assert_eq!(locale_for_route("klingon"), config::DEFAULT_LOCALE);
    }

    #[test]
    fn test_current_locale() {
        assert_eq!(current_locale(None), config::DEFAULT_LOCALE);
        assert_eq!(current_locale(Some(Route::Home)), config::DEFAULT_LOCALE);
        assert_eq!(
            current_locale(Some(Route::LocalizedHome { lang: "es".to_string() })),
            Locale::Es
        );
    }

    #[test]
    fn test_localized_route_path() {
        assert_eq!(Route::LocalizedHome { lang: "es".to_string() }.to_path(), "/es");
        assert_eq!(Route::recognize("/ar"), Some(Route::LocalizedHome { lang: "ar".to_string() }));
    }
}
