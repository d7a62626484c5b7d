use yew::prelude::*;

use crate::content::LinkButton;

pub fn is_external(to: &str) -> bool {
    to.starts_with("http://") || to.starts_with("https://")
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    Solid,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct ButtonLinkProps {
    pub to: AttrValue,
    #[prop_or(ButtonVariant::Solid)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ButtonLink)]
pub fn button_link(props: &ButtonLinkProps) -> Html {
    let class = classes!(
        "button-link",
        match props.variant {
            ButtonVariant::Solid => "button-link-solid",
            ButtonVariant::Outline => "button-link-outline",
        }
    );

    if is_external(&props.to) {
        html! {
            <a href={props.to.clone()} {class} target="_blank" rel="noopener noreferrer">
                { for props.children.iter() }
            </a>
        }
    } else {
        html! {
            <a href={props.to.clone()} {class}>
                { for props.children.iter() }
            </a>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonLinkRowProps {
    pub buttons: Vec<LinkButton>,
}

/// First button solid, the rest outlined.
#[function_component(ButtonLinkRow)]
pub fn button_link_row(props: &ButtonLinkRowProps) -> Html {
    html! {
        <div class="button-link-row">
            { for props.buttons.iter().enumerate().map(|(i, button)| {
                let variant = if i == 0 { ButtonVariant::Solid } else { ButtonVariant::Outline };
                html! {
                    <ButtonLink to={button.to} {variant}>
                        {&button.label}
                    </ButtonLink>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com/ethereum/ethereum-org-website"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("/wallets/find-wallet/"));
        assert!(!is_external("/dapps/?category=technology"));
    }
}
