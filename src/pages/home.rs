use web_sys::window;
use yew::prelude::*;

use crate::components::action_card::ActionCard;
use crate::components::button_link::{ButtonLink, ButtonLinkRow, ButtonVariant};
use crate::components::callout_banner::CalloutBanner;
use crate::components::code_modal::CodeModal;
use crate::components::codeblock::Codeblock;
use crate::components::morpher::Morpher;
use crate::components::page_metadata::PageMetadata;
use crate::components::stats_box_grid::StatsBoxGrid;
use crate::components::title_card_list::TitleCardList;
use crate::content::{FeatureSection, HomeContent};
use crate::i18n::{Locale, Translate, Translator};
use crate::selector::{ExampleSelector, ModalAction};

const HOME_STYLES: &str = r#"
    .home-page {
        display: flex;
        flex-direction: column;
        align-items: center;
        width: 100%;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #333;
    }
    .hero-image {
        width: 100%;
        min-height: 380px;
        max-height: 440px;
        object-fit: cover;
        margin-bottom: 2rem;
    }
    .morpher {
        font-size: 1.25rem;
        color: #777;
        min-height: 2rem;
    }
    .page-header {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        margin: 1rem 0 2rem;
        padding: 0 2rem;
    }
    .page-header h1 {
        font-size: 2.5rem;
        margin: 0;
    }
    .page-header p {
        max-width: 55ch;
        font-size: 1.25rem;
        color: #666;
    }
    .gray-container {
        width: 100%;
        padding-bottom: 4rem;
        background: #f7f7f7;
    }
    .content-box {
        padding: 1rem 2rem;
    }
    .get-started-row {
        display: flex;
        align-items: center;
        gap: 2rem;
        margin: 1rem 0 3rem;
    }
    .get-started-row > div {
        flex: 0 0 50%;
    }
    .card-container {
        display: flex;
        flex-wrap: wrap;
        gap: 2rem;
        width: 100%;
    }
    .action-card {
        flex: 1 1 400px;
        display: flex;
        flex-direction: column;
        text-decoration: none;
        color: inherit;
        background: white;
        border: 1px solid #333;
        border-radius: 2px;
        box-shadow: 4px 4px 0 rgba(0, 0, 0, 0.12);
        transition: transform 0.1s;
    }
    .action-card:hover {
        transform: translateY(-2px);
    }
    .action-card-image {
        display: flex;
        justify-content: center;
        background: #eef0ff;
        min-height: 200px;
    }
    .action-card-content {
        padding: 1.5rem;
    }
    .main-section {
        display: flex;
        align-items: center;
        width: 100%;
        min-height: 720px;
        border-top: 1px solid #333;
        border-bottom: 1px solid #333;
        margin-top: -1px;
    }
    .section-row {
        display: flex;
        align-items: center;
        width: 100%;
    }
    .section-row.reversed {
        flex-direction: row-reverse;
    }
    .feature-content {
        flex: 0 0 50%;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 6rem;
        box-sizing: border-box;
    }
    .feature-content h2 {
        font-size: 2rem;
        margin-bottom: 0.5rem;
    }
    .feature-content p {
        font-size: 1.25rem;
        line-height: 1.4;
        margin-bottom: 2rem;
    }
    .feature-image {
        width: 100%;
    }
    .button-link-row {
        display: flex;
        gap: 0.5rem;
        flex-wrap: wrap;
    }
    .button-link {
        display: inline-block;
        padding: 0.5rem 1rem;
        border-radius: 4px;
        text-decoration: none;
        border: 1px solid #1c1cff;
    }
    .button-link-solid {
        background: #1c1cff;
        color: white;
    }
    .button-link-outline {
        background: transparent;
        color: #1c1cff;
    }
    .title-card-list {
        background: white;
        border: 1px solid #333;
        box-shadow: 4px 4px 0 rgba(0, 0, 0, 0.12);
        max-width: 624px;
        margin-left: 4rem;
    }
    .title-card-list-header {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem 1.5rem;
        border-bottom: 1px solid #ddd;
    }
    .title-card-item {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        width: 100%;
        padding: 1rem 1.5rem;
        border: none;
        border-bottom: 1px solid #eee;
        background: none;
        text-align: start;
        cursor: pointer;
    }
    .title-card-item:hover {
        background: #f5f5ff;
    }
    .title-card-title {
        font-weight: 600;
    }
    .title-card-description {
        color: #666;
        font-size: 0.875rem;
    }
    .modal-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        z-index: 100;
    }
    .modal-component {
        position: fixed;
        left: 0;
        right: 0;
        bottom: 0;
        top: 50%;
        background: white;
        display: flex;
        flex-direction: column;
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.5rem 1.5rem;
        border-bottom: 1px solid #ddd;
    }
    .modal-close {
        font-size: 1.5rem;
        border: none;
        background: none;
        cursor: pointer;
    }
    .modal-component-content {
        width: 100%;
        overflow: auto;
    }
    .codeblock {
        position: relative;
        background: #2a2734;
        color: #eeebff;
        font-size: 0.875rem;
    }
    .codeblock-language {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        text-transform: uppercase;
        opacity: 0.5;
        font-size: 0.75rem;
    }
    .codeblock pre {
        margin: 0;
        padding: 1rem;
        overflow-x: auto;
    }
    .code-line {
        display: flex;
        white-space: pre;
    }
    .line-number {
        min-width: 2.5rem;
        opacity: 0.4;
        user-select: none;
    }
    .stats-box-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        margin: 0 2rem;
        border: 1px solid #333;
        background: white;
    }
    .stats-box {
        padding: 1.5rem;
        border: 1px solid #ddd;
    }
    .stats-box-value {
        font-size: 3rem;
        font-weight: 700;
    }
    .stat-error {
        font-size: 1rem;
        color: #b80000;
    }
    .stats-box-source {
        font-size: 0.875rem;
        color: #777;
        margin-top: 0.5rem;
    }
    .callout-banner {
        display: flex;
        align-items: center;
        gap: 2rem;
        margin: 8rem 0 4rem;
        padding: 2rem;
        background: #f0e9ff;
        border-radius: 4px;
    }
    @media (max-width: 992px) {
        .get-started-row,
        .section-row,
        .section-row.reversed,
        .callout-banner {
            flex-direction: column-reverse;
        }
        .feature-content {
            padding: 2rem;
        }
        .title-card-list {
            margin-left: 0;
        }
        .main-section {
            min-height: 0;
            padding: 2rem 0;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct FeatureBlockProps {
    feature: FeatureSection,
}

#[function_component(FeatureBlock)]
fn feature_block(props: &FeatureBlockProps) -> Html {
    let feature = &props.feature;
    let image = feature.figure.image.resolve();

    html! {
        <section class="main-section" style={format!("background: {};", feature.background)}>
            <div class={classes!("section-row", feature.reversed.then(|| "reversed"))}>
                <div class="feature-content">
                    <h2>{&feature.title}</h2>
                    <p>{&feature.description}</p>
                    <ButtonLinkRow buttons={feature.buttons.clone()} />
                </div>
                <div class="feature-image">
                    <img src={image.src.clone()} alt={feature.figure.alt.clone()} style={image.style()} loading="lazy" />
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let locale = props.locale;
    let t = Translator::new(locale);
    let content = use_memo(|locale: &Locale| HomeContent::assemble(&Translator::new(*locale)), locale);

    let selector = {
        let len = content.code_examples.len();
        use_reducer(move || ExampleSelector::new(len))
    };

    // Start at the top when arriving from another language
    use_effect_with_deps(
        |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        locale,
    );

    let on_select = {
        let selector = selector.clone();
        Callback::from(move |index: usize| selector.dispatch(ModalAction::Select(index)))
    };

    let on_close = {
        let selector = selector.clone();
        Callback::from(move |_: ()| selector.dispatch(ModalAction::Close))
    };

    let hero = content.hero.image.resolve();
    let get_started_image = content.get_started.figure.image.resolve();
    let active_example = content.code_examples.get(selector.selected_index());
    let developers = &content.developers;

    html! {
        <div class="home-page" dir={locale.dir()}>
            <style>{HOME_STYLES}</style>
            <PageMetadata
                title={content.meta_title.clone()}
                description={content.meta_description.clone()}
                {locale}
            />
            <img
                class="hero-image"
                src={hero.src.clone()}
                alt={content.hero.alt.clone()}
                loading="eager"
            />
            <Morpher />
            <header class="page-header">
                <h1>{&content.header.title}</h1>
                <p>{&content.header.description}</p>
                <ButtonLink to={content.header.button.to} variant={ButtonVariant::Outline}>
                    {&content.header.button.label}
                </ButtonLink>
            </header>

            // Getting started
            <div class="gray-container">
                <div class="content-box">
                    <div class="get-started-row">
                        <div>
                            <h2>{&content.get_started.title}</h2>
                            <p>{&content.get_started.description}</p>
                        </div>
                        <div>
                            <img
                                src={get_started_image.src.clone()}
                                alt={content.get_started.figure.alt.clone()}
                                style={get_started_image.style()}
                            />
                        </div>
                    </div>
                    <div class="card-container">
                        { for content.cards.iter().map(|card| html! {
                            <ActionCard card={card.clone()} />
                        }) }
                    </div>
                </div>
            </div>

            { for content.features.iter().map(|feature| html! {
                <FeatureBlock feature={feature.clone()} />
            }) }

            // Developers
            <section class="main-section" style={format!("background: {};", developers.background)}>
                <div class="section-row">
                    <div class="content-box">
                        <TitleCardList
                            header={developers.examples_header.clone()}
                            examples={content.code_examples.clone()}
                            on_select={on_select}
                        />
                    </div>
                    <div class="feature-content">
                        <h2>{&developers.title}</h2>
                        <p>{&developers.description}</p>
                        <ButtonLinkRow buttons={vec![developers.button.clone()]} />
                    </div>
                    {
                        if let Some(example) = active_example {
                            html! {
                                <CodeModal
                                    is_open={selector.is_open()}
                                    title={example.title.clone()}
                                    close_label={t.translate("page-index-code-modal-close")}
                                    on_close={on_close}
                                >
                                    <Codeblock code={example.code} language={example.code_language} />
                                </CodeModal>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            // Network stats
            <div class="gray-container">
                <div class="content-box">
                    <h2>{&content.stats.title}</h2>
                    <p>{&content.stats.subtitle}</p>
                </div>
                <StatsBoxGrid {locale} />
            </div>

            // Explore
            <div class="content-box">
                <h2>{&content.touts_header}</h2>
            </div>
            <div class="content-box">
                <div class="card-container">
                    { for content.touts.iter().map(|tout| html! {
                        <ActionCard card={tout.clone()} />
                    }) }
                </div>
                <CalloutBanner banner={content.banner.clone()} />
            </div>
        </div>
    }
}
