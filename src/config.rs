use crate::i18n::Locale;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8888"  // netlify dev serves the stats functions here
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn get_assets_url() -> &'static str {
    "/assets"  // served by the hosting site, not bundled by trunk
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

// How long each word stays in the hero morpher
pub const MORPHER_INTERVAL_MS: u32 = 3000;

pub const GITHUB_REPO_URL: &str = "https://github.com/ethereum/ethereum-org-website";
