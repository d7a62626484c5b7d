use yew::prelude::*;

use crate::content::CodeExample;

#[derive(Properties, PartialEq)]
pub struct TitleCardListProps {
    pub header: AttrValue,
    pub examples: Vec<CodeExample>,
    pub on_select: Callback<usize>,
}

#[function_component(TitleCardList)]
pub fn title_card_list(props: &TitleCardListProps) -> Html {
    html! {
        <div class="title-card-list">
            <div class="title-card-list-header">
                <span class="code-icon">{"</>"}</span>
                <h3>{&props.header}</h3>
            </div>
            { for props.examples.iter().enumerate().map(|(i, example)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(i);
                    })
                };

                html! {
                    <button class="title-card-item" {onclick}>
                        <span class="title-card-title">{&example.title}</span>
                        <span class="title-card-description">{&example.description}</span>
                    </button>
                }
            }) }
        </div>
    }
}
