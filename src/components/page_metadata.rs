use log::warn;
use web_sys::{window, Document};
use yew::prelude::*;

use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct PageMetadataProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub locale: Locale,
}

pub fn document_title(page_title: &str) -> String {
    format!("{} | ethereum.org", page_title)
}

fn set_meta_description(document: &Document, description: &str) {
    let meta = match document.query_selector("meta[name=\"description\"]") {
        Ok(Some(meta)) => meta,
        _ => {
            let Ok(meta) = document.create_element("meta") else {
                warn!("Could not create description meta tag");
                return;
            };
            let _ = meta.set_attribute("name", "description");
            if let Ok(Some(head)) = document.query_selector("head") {
                let _ = head.append_child(&meta);
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", description);
}

/// Keeps `<title>`, the description meta tag and `<html lang dir>` in sync with the page.
#[function_component(PageMetadata)]
pub fn page_metadata(props: &PageMetadataProps) -> Html {
    use_effect_with_deps(
        |(title, description, locale): &(AttrValue, AttrValue, Locale)| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&document_title(title));
                set_meta_description(&document, description);

                if let Some(html) = document.document_element() {
                    let _ = html.set_attribute("lang", locale.code());
                    let _ = html.set_attribute("dir", locale.dir());
                }
            }
            || ()
        },
        (props.title.clone(), props.description.clone(), props.locale),
    );

    html! {}
}
