use yew::prelude::*;

use crate::content::ContentCard;

#[derive(Properties, PartialEq)]
pub struct ActionCardProps {
    pub card: ContentCard,
}

#[function_component(ActionCard)]
pub fn action_card(props: &ActionCardProps) -> Html {
    let card = &props.card;
    let image = card.image.resolve();

    html! {
        <a href={card.to} class="action-card">
            <div class="action-card-image">
                <img src={image.src.clone()} alt={card.alt.clone()} style={image.style()} loading="lazy" />
            </div>
            <div class="action-card-content">
                <h3>{&card.title}</h3>
                <p>{&card.description}</p>
            </div>
        </a>
    }
}
