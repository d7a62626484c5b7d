//! Static homepage content, localized once per locale and handed to the view.

use crate::config;
use crate::i18n::Translate;
use crate::images::ImageRef;

#[derive(Clone, Debug, PartialEq)]
pub struct ContentCard {
    pub title: String,
    pub description: String,
    pub alt: String,
    pub image: ImageRef,
    pub to: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeLanguage {
    Solidity,
    JavaScript,
}

impl CodeLanguage {
    pub fn class_name(self) -> &'static str {
        match self {
            CodeLanguage::Solidity => "language-solidity",
            CodeLanguage::JavaScript => "language-javascript",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeLanguage::Solidity => "Solidity",
            CodeLanguage::JavaScript => "JavaScript",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CodeExample {
    pub title: String,
    pub description: String,
    pub code_language: CodeLanguage,
    pub code: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkButton {
    pub label: String,
    pub to: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub image: ImageRef,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageHeader {
    pub title: String,
    pub description: String,
    pub button: LinkButton,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GetStartedSection {
    pub title: String,
    pub description: String,
    pub figure: Figure,
}

/// One of the full-width coloured sections between "get started" and the developer examples.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSection {
    pub title: String,
    pub description: String,
    pub figure: Figure,
    pub buttons: Vec<LinkButton>,
    pub background: &'static str,
    pub reversed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DevelopersSection {
    pub examples_header: String,
    pub title: String,
    pub description: String,
    pub button: LinkButton,
    pub background: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsHeader {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalloutBanner {
    pub title: String,
    pub description: String,
    pub figure: Figure,
    pub buttons: Vec<LinkButton>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeContent {
    pub meta_title: String,
    pub meta_description: String,
    pub hero: Figure,
    pub header: PageHeader,
    pub get_started: GetStartedSection,
    pub cards: Vec<ContentCard>,
    pub features: Vec<FeatureSection>,
    pub developers: DevelopersSection,
    pub code_examples: Vec<CodeExample>,
    pub stats: StatsHeader,
    pub touts_header: String,
    pub touts: Vec<ContentCard>,
    pub banner: CalloutBanner,
}

struct CardSource {
    key: &'static str,
    image: ImageRef,
    to: &'static str,
}

const CARDS: [CardSource; 4] = [
    CardSource { key: "wallet", image: ImageRef::fixed("wallet-cropped.png", 320), to: "/wallets/find-wallet/" },
    CardSource { key: "eth", image: ImageRef::fixed("eth.png", 320), to: "/get-eth/" },
    CardSource { key: "dapps", image: ImageRef::fixed("doge-computer.png", 320), to: "/dapps/" },
    CardSource { key: "devs", image: ImageRef::fixed("developers-eth-blocks.png", 320), to: "/developers/" },
];

const TOUTS: [CardSource; 3] = [
    CardSource { key: "upgrades", image: ImageRef::fixed("upgrades/merge.png", 320), to: "/upgrades/" },
    CardSource { key: "enterprise", image: ImageRef::fixed("infrastructure_transparent.png", 320), to: "/enterprise/" },
    CardSource { key: "community", image: ImageRef::fixed("enterprise-eth.png", 320), to: "/community/" },
];

const CODE_EXAMPLES: [(CodeLanguage, &str); 4] = [
    (CodeLanguage::Solidity, include_str!("../snippets/SimpleWallet.sol")),
    (CodeLanguage::Solidity, include_str!("../snippets/SimpleToken.sol")),
    (CodeLanguage::JavaScript, include_str!("../snippets/CreateWallet.js")),
    (CodeLanguage::Solidity, include_str!("../snippets/SimpleDomainRegistry.sol")),
];

struct FeatureSource {
    key: &'static str,
    alt_id: &'static str,
    image: ImageRef,
    buttons: &'static [(&'static str, &'static str)],
    background: &'static str,
    reversed: bool,
}

const FEATURES: [FeatureSource; 4] = [
    FeatureSource {
        key: "page-index-what-is-ethereum",
        alt_id: "page-index-what-is-ethereum-image-alt",
        image: ImageRef::full_width("what-is-ethereum.png"),
        buttons: &[
            ("page-index-what-is-ethereum-button", "/what-is-ethereum/"),
            ("page-index-what-is-ethereum-secondary-button", "/eth/"),
        ],
        background: "#e1fefa",
        reversed: true,
    },
    FeatureSource {
        key: "page-index-defi",
        alt_id: "page-index-defi-image-alt",
        image: ImageRef::full_width("impact_transparent.png"),
        buttons: &[("page-index-defi-button", "/defi/")],
        background: "#ffe5f9",
        reversed: false,
    },
    FeatureSource {
        key: "page-index-nft",
        alt_id: "page-index-nft-alt",
        image: ImageRef::full_width("infrastructure_transparent.png"),
        buttons: &[("page-index-nft-button", "/nft/")],
        background: "#e1fefa",
        reversed: true,
    },
    FeatureSource {
        key: "page-index-internet",
        alt_id: "page-index-internet-image-alt",
        image: ImageRef::full_width("future_transparent.png"),
        buttons: &[("page-index-internet-button", "/dapps/?category=technology")],
        background: "#ffe5f9",
        reversed: false,
    },
];

fn card(t: &impl Translate, prefix: &str, source: &CardSource) -> ContentCard {
    ContentCard {
        title: t.translate(&format!("{}-{}-title", prefix, source.key)),
        description: t.translate(&format!("{}-{}-description", prefix, source.key)),
        alt: t.translate(&format!("{}-{}-image-alt", prefix, source.key)),
        image: source.image,
        to: source.to,
    }
}

fn button(t: &impl Translate, id: &str, to: &'static str) -> LinkButton {
    LinkButton { label: t.translate(id), to }
}

impl HomeContent {
    pub fn assemble(t: &impl Translate) -> Self {
        let cards = CARDS
            .iter()
            .map(|source| card(t, "page-index-get-started", source))
            .collect();

        let touts = TOUTS
            .iter()
            .map(|source| card(t, "page-index-tout", source))
            .collect();

        let code_examples = CODE_EXAMPLES
            .iter()
            .enumerate()
            .map(|(i, (code_language, code))| CodeExample {
                title: t.translate(&format!("page-index-developers-code-example-title-{}", i)),
                description: t.translate(&format!("page-index-developers-code-example-description-{}", i)),
                code_language: *code_language,
                code: *code,
            })
            .collect();

        let features = FEATURES
            .iter()
            .map(|source| FeatureSection {
                title: t.translate(source.key),
                description: t.translate(&format!("{}-description", source.key)),
                figure: Figure { image: source.image, alt: t.translate(source.alt_id) },
                buttons: source
                    .buttons
                    .iter()
                    .map(|(id, to)| button(t, id, *to))
                    .collect(),
                background: source.background,
                reversed: source.reversed,
            })
            .collect();

        HomeContent {
            meta_title: t.translate("page-index-meta-title"),
            meta_description: t.translate("page-index-meta-description"),
            hero: Figure {
                image: ImageRef::full_width("home/hero.png"),
                alt: t.translate("page-index-hero-image-alt"),
            },
            header: PageHeader {
                title: t.translate("page-index-title"),
                description: t.translate("page-index-description"),
                button: button(t, "page-index-title-button", "/learn/"),
            },
            get_started: GetStartedSection {
                title: t.translate("page-index-get-started"),
                description: t.translate("page-index-get-started-description"),
                figure: Figure {
                    image: ImageRef::full_width("hackathon_transparent.png"),
                    alt: t.translate("page-index-get-started-image-alt"),
                },
            },
            cards,
            features,
            developers: DevelopersSection {
                examples_header: t.translate("page-index-developers-code-examples"),
                title: t.translate("page-index-developers"),
                description: t.translate("page-index-developers-description"),
                button: button(t, "page-index-developers-button", "/dapps/?category=technology"),
                background: "#f0e9ff",
            },
            code_examples,
            stats: StatsHeader {
                title: t.translate("page-index-network-stats-title"),
                subtitle: t.translate("page-index-network-stats-subtitle"),
            },
            touts_header: t.translate("page-index-touts-header"),
            touts,
            banner: CalloutBanner {
                title: t.translate("page-index-contribution-banner-title"),
                description: t.translate("page-index-contribution-banner-description"),
                figure: Figure {
                    image: ImageRef::constrained("finance_transparent.png", 600),
                    alt: t.translate("page-index-contribution-banner-image-alt"),
                },
                buttons: vec![
                    button(t, "page-index-contribution-banner-button", "/contributing/"),
                    LinkButton { label: "GitHub".to_string(), to: config::GITHUB_REPO_URL },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, Translator};

    struct EchoIds;

    impl Translate for EchoIds {
        fn translate(&self, id: &str) -> String {
            id.to_string()
        }
    }

    #[test]
    fn test_section_sizes() {
        let content = HomeContent::assemble(&EchoIds);
        assert_eq!(content.cards.len(), 4);
        assert_eq!(content.touts.len(), 3);
        assert_eq!(content.code_examples.len(), 4);
        assert_eq!(content.features.len(), 4);
    }

    #[test]
    fn test_card_destinations() {
        let content = HomeContent::assemble(&EchoIds);
        let cards: Vec<&str> = content.cards.iter().map(|c| c.to).collect();
        assert_eq!(cards, vec!["/wallets/find-wallet/", "/get-eth/", "/dapps/", "/developers/"]);

        let touts: Vec<&str> = content.touts.iter().map(|c| c.to).collect();
        assert_eq!(touts, vec!["/upgrades/", "/enterprise/", "/community/"]);
    }

    #[test]
    fn test_cards_use_their_message_ids() {
        let content = HomeContent::assemble(&EchoIds);
        let wallet = &content.cards[0];
        assert_eq!(wallet.title, "page-index-get-started-wallet-title");
        assert_eq!(wallet.description, "page-index-get-started-wallet-description");
        assert_eq!(wallet.alt, "page-index-get-started-wallet-image-alt");
        assert_eq!(wallet.image, ImageRef::fixed("wallet-cropped.png", 320));

        assert_eq!(content.touts[2].title, "page-index-tout-community-title");
        assert_eq!(content.features[2].figure.alt, "page-index-nft-alt");
    }

    #[test]
    fn test_code_examples_order_and_languages() {
        let content = HomeContent::assemble(&EchoIds);
        let languages: Vec<CodeLanguage> = content.code_examples.iter().map(|e| e.code_language).collect();
        assert_eq!(
            languages,
            vec![CodeLanguage::Solidity, CodeLanguage::Solidity, CodeLanguage::JavaScript, CodeLanguage::Solidity]
        );
        assert!(content.code_examples[0].code.contains("contract SimpleWallet"));
        assert!(content.code_examples[1].code.contains("contract SimpleToken"));
        assert!(content.code_examples[2].code.contains("ethers.Wallet"));
        assert!(content.code_examples[3].code.contains("contract SimpleDomainRegistry"));
        assert_eq!(content.code_examples[3].title, "page-index-developers-code-example-title-3");
    }

    #[test]
    fn test_code_language_classes() {
        assert_eq!(CodeLanguage::Solidity.class_name(), "language-solidity");
        assert_eq!(CodeLanguage::JavaScript.class_name(), "language-javascript");
    }

    #[test]
    fn test_every_locale_has_text() {
        for locale in Locale::ALL {
            let content = HomeContent::assemble(&Translator::new(locale));
            for card in content.cards.iter().chain(content.touts.iter()) {
                assert!(!card.title.is_empty());
                assert!(!card.description.is_empty());
                assert!(!card.title.starts_with("page-index-"), "untranslated {}", card.title);
                assert!(!card.description.starts_with("page-index-"), "untranslated {}", card.description);
            }
            for example in &content.code_examples {
                assert!(!example.title.is_empty());
                assert!(!example.description.is_empty());
                assert!(!example.title.starts_with("page-index-"));
                assert!(!example.description.starts_with("page-index-"));
            }
        }
    }

    #[test]
    fn test_feature_sections() {
        let content = HomeContent::assemble(&EchoIds);
        let first = &content.features[0];
        assert!(first.reversed);
        assert_eq!(first.buttons.len(), 2);
        assert_eq!(first.buttons[1].to, "/eth/");
        assert_eq!(content.features[3].buttons[0].to, "/dapps/?category=technology");
    }

    #[test]
    fn test_developers_button_destination() {
        let content = HomeContent::assemble(&EchoIds);
        assert_eq!(content.developers.button.label, "page-index-developers-button");
        assert_eq!(content.developers.button.to, "/dapps/?category=technology");
    }

    #[test]
    fn test_banner_links_to_repository() {
        let content = HomeContent::assemble(&EchoIds);
        assert_eq!(content.banner.buttons[0].to, "/contributing/");
        assert_eq!(content.banner.buttons[1].to, config::GITHUB_REPO_URL);
    }
}
