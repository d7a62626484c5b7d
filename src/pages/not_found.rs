use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::i18n::{Translate, Translator};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let t = Translator::new(config::DEFAULT_LOCALE);

    html! {
        <div class="not-found-page">
            <h1>{t.translate("page-not-found-title")}</h1>
            <p>{t.translate("page-not-found-description")}</p>
            <Link<Route> to={Route::Home} classes="button-link button-link-solid">
                {t.translate("page-not-found-button")}
            </Link<Route>>
        </div>
    }
}
