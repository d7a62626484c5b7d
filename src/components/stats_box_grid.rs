use log::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::i18n::{Locale, Translate, Translator};
use crate::stats::{fetch_stat, StatKind, StatState};

#[derive(Properties, PartialEq)]
struct StatsBoxProps {
    kind: StatKind,
    locale: Locale,
}

#[function_component(StatsBox)]
fn stats_box(props: &StatsBoxProps) -> Html {
    let t = Translator::new(props.locale);
    let state = use_state(|| StatState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |kind: &StatKind| {
                let kind = *kind;
                spawn_local(async move {
                    match fetch_stat(kind).await {
                        Ok(value) => state.set(StatState::Loaded(kind.format(value))),
                        Err(e) => {
                            warn!("Failed to load {:?} stat: {}", kind, e);
                            state.set(StatState::Failed);
                        }
                    }
                });
                || ()
            },
            props.kind,
        );
    }

    let (source_name, source_url) = props.kind.source();
    let value = match &*state {
        StatState::Loading => html! { <span class="stat-loading">{"…"}</span> },
        StatState::Loaded(value) => html! { <span class="stat-value">{value}</span> },
        StatState::Failed => html! {
            <span class="stat-error">{t.translate("page-index-network-stats-loading-error")}</span>
        },
    };

    html! {
        <div class="stats-box">
            <div class="stats-box-value">{value}</div>
            <div class="stats-box-title" title={t.translate(props.kind.explainer_id())}>
                {t.translate(props.kind.title_id())}
            </div>
            <div class="stats-box-source">
                {format!("{}: ", t.translate("page-index-network-stats-source"))}
                <a href={source_url} target="_blank" rel="noopener noreferrer">{source_name}</a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsBoxGridProps {
    pub locale: Locale,
}

#[function_component(StatsBoxGrid)]
pub fn stats_box_grid(props: &StatsBoxGridProps) -> Html {
    html! {
        <div class="stats-box-grid">
            { for StatKind::ALL.iter().map(|kind| html! {
                <StatsBox kind={*kind} locale={props.locale} />
            }) }
        </div>
    }
}
