use yew::prelude::*;

use crate::components::button_link::ButtonLinkRow;
use crate::content::CalloutBanner as BannerContent;

#[derive(Properties, PartialEq)]
pub struct CalloutBannerProps {
    pub banner: BannerContent,
}

#[function_component(CalloutBanner)]
pub fn callout_banner(props: &CalloutBannerProps) -> Html {
    let banner = &props.banner;
    let image = banner.figure.image.resolve();

    html! {
        <aside class="callout-banner">
            <img src={image.src.clone()} alt={banner.figure.alt.clone()} style={image.style()} loading="lazy" />
            <div class="callout-content">
                <h2>{&banner.title}</h2>
                <p>{&banner.description}</p>
                <ButtonLinkRow buttons={banner.buttons.clone()} />
            </div>
        </aside>
    }
}
