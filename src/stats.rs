use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response contained no data")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatKind {
    EthPrice,
    ValueLocked,
    Transactions,
    Nodes,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatState {
    Loading,
    Loaded(String),
    Failed,
}

#[derive(Deserialize)]
struct UsdQuote {
    usd: f64,
}

#[derive(Deserialize)]
struct PriceResponse {
    ethereum: UsdQuote,
}

#[derive(Deserialize)]
struct TvlPoint {
    #[serde(rename = "totalLiquidityUSD")]
    total_liquidity_usd: f64,
}

// Shape returned by the site's own txs/nodes functions
#[derive(Deserialize)]
struct ValueResponse {
    value: f64,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::EthPrice,
        StatKind::ValueLocked,
        StatKind::Transactions,
        StatKind::Nodes,
    ];

    pub fn title_id(self) -> &'static str {
        match self {
            StatKind::EthPrice => "page-index-network-stats-eth-price-description",
            StatKind::ValueLocked => "page-index-network-stats-value-defi-description",
            StatKind::Transactions => "page-index-network-stats-tx-day-description",
            StatKind::Nodes => "page-index-network-stats-nodes-description",
        }
    }

    pub fn explainer_id(self) -> &'static str {
        match self {
            StatKind::EthPrice => "page-index-network-stats-eth-price-explainer",
            StatKind::ValueLocked => "page-index-network-stats-value-defi-explainer",
            StatKind::Transactions => "page-index-network-stats-tx-day-explainer",
            StatKind::Nodes => "page-index-network-stats-nodes-explainer",
        }
    }

    /// Display name and link of the data provider.
    pub fn source(self) -> (&'static str, &'static str) {
        match self {
            StatKind::EthPrice => ("CoinGecko", "https://www.coingecko.com/en/coins/ethereum"),
            StatKind::ValueLocked => ("DefiLlama", "https://defillama.com/"),
            StatKind::Transactions => ("Etherscan", "https://etherscan.io/"),
            StatKind::Nodes => ("Etherscan", "https://etherscan.io/nodetracker"),
        }
    }

    pub fn endpoint(self) -> String {
        match self {
            StatKind::EthPrice => {
                "https://api.coingecko.com/api/v3/simple/price?ids=ethereum&vs_currencies=usd".to_string()
            }
            StatKind::ValueLocked => "https://api.llama.fi/charts/Ethereum".to_string(),
            StatKind::Transactions => format!("{}/.netlify/functions/txs", config::get_backend_url()),
            StatKind::Nodes => format!("{}/.netlify/functions/nodes", config::get_backend_url()),
        }
    }

    pub fn parse(self, body: &str) -> Result<f64, StatsError> {
        match self {
            StatKind::EthPrice => Ok(serde_json::from_str::<PriceResponse>(body)?.ethereum.usd),
            StatKind::ValueLocked => serde_json::from_str::<Vec<TvlPoint>>(body)?
                .last()
                .map(|point| point.total_liquidity_usd)
                .ok_or(StatsError::Empty),
            StatKind::Transactions | StatKind::Nodes => {
                Ok(serde_json::from_str::<ValueResponse>(body)?.value)
            }
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            StatKind::EthPrice => format_usd(value),
            StatKind::ValueLocked => format!("${}", format_compact(value)),
            StatKind::Transactions | StatKind::Nodes => format_compact(value),
        }
    }
}

pub async fn fetch_stat(kind: StatKind) -> Result<f64, StatsError> {
    let response = Request::get(&kind.endpoint())
        .send()
        .await
        .map_err(|e| StatsError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(StatsError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| StatsError::Network(e.to_string()))?;

    kind.parse(&body)
}

/// `1234.5` -> `$1,234.50`
pub fn format_usd(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// `48_213_000_000.0` -> `48.2B`
///
/// The unit is chosen after rounding, so `999_960.0` is `1M` rather than `1000K`.
pub fn format_compact(value: f64) -> String {
    const UNITS: [&str; 4] = ["K", "M", "B", "T"];

    let mut scaled = value.round();
    let mut suffix = "";
    for (i, unit) in UNITS.iter().enumerate() {
        if scaled.abs() < 1000.0 {
            break;
        }
        scaled = (value / 1000f64.powi(i as i32 + 1) * 10.0).round() / 10.0;
        suffix = unit;
    }

    if scaled.fract() == 0.0 {
        format!("{:.0}{}", scaled, suffix)
    } else {
        format!("{:.1}{}", scaled, suffix)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coingecko_price() {
        let body = r#"{"ethereum":{"usd":1843.27}}"#;
        assert_eq!(StatKind::EthPrice.parse(body).unwrap(), 1843.27);
    }

    #[test]
    fn test_parse_llama_uses_latest_point() {
        let body = r#"[
            {"date":"1690156800","totalLiquidityUSD":25100000000.5},
            {"date":"1690243200","totalLiquidityUSD":25300000000.0}
        ]"#;
        assert_eq!(StatKind::ValueLocked.parse(body).unwrap(), 25_300_000_000.0);
    }

    #[test]
    fn test_parse_empty_llama_series() {
        assert!(matches!(StatKind::ValueLocked.parse("[]"), Err(StatsError::Empty)));
    }

    #[test]
    fn test_parse_function_value() {
        assert_eq!(StatKind::Transactions.parse(r#"{"value":1093488}"#).unwrap(), 1_093_488.0);
        assert_eq!(StatKind::Nodes.parse(r#"{"value":6022}"#).unwrap(), 6022.0);
    }

    #[test]
    fn test_parse_garbage_is_decode_error() {
        assert!(matches!(StatKind::EthPrice.parse("<html>"), Err(StatsError::Decode(_))));
        assert!(matches!(StatKind::Nodes.parse(r#"{"count":1}"#), Err(StatsError::Decode(_))));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1843.27), "$1,843.27");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1_000.0), "1K");
        assert_eq!(format_compact(1_093_488.0), "1.1M");
        assert_eq!(format_compact(25_300_000_000.0), "25.3B");
        assert_eq!(format_compact(2_000_000_000_000.0), "2T");
    }

    #[test]
    fn test_format_compact_rounds_into_next_unit() {
        assert_eq!(format_compact(999.6), "1K");
        assert_eq!(format_compact(999_960.0), "1M");
        assert_eq!(format_compact(999_949.0), "999.9K");
        assert_eq!(format_compact(999_960_000.0), "1B");
        assert_eq!(StatKind::ValueLocked.format(999_960_000_000.0), "$1T");
        assert_eq!(StatKind::Transactions.format(999_999.0), "1M");
    }

    #[test]
    fn test_kind_formatting() {
        assert_eq!(StatKind::ValueLocked.format(48_213_000_000.0), "$48.2B");
        assert_eq!(StatKind::Nodes.format(6022.0), "6K");
        assert_eq!(StatKind::EthPrice.format(1843.27), "$1,843.27");
    }

    #[test]
    fn test_function_endpoints_use_backend() {
        assert!(StatKind::Transactions.endpoint().starts_with(config::get_backend_url()));
        assert!(StatKind::Nodes.endpoint().ends_with("/.netlify/functions/nodes"));
    }
}
