//! Catalogue of well-known Stellar assets offered in the dashboard pickers.

use serde::Serialize;

/// A commonly used asset and its issuing account.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CommonAsset {
    pub code: &'static str,
    pub name: &'static str,
    /// `None` for the native asset
    pub issuer: Option<&'static str>,
    #[serde(rename = "type")]
    pub asset_type: &'static str,
}

const COMMON_ASSETS: [CommonAsset; 6] = [
    CommonAsset {
        code: "XLM",
        name: "Stellar Lumens",
        issuer: None,
        asset_type: "native",
    },
    CommonAsset {
        code: "USDC",
        name: "USD Coin",
        issuer: Some("GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN"),
        asset_type: "credit_alphanum4",
    },
    CommonAsset {
        code: "yUSDC",
        name: "Wrapped USDC",
        issuer: Some("GADUOYRGUXBTKDWGVCL2ZGEIRXG3ONYSGI4AMM3YVNM2H3JAWQVEXW3I"),
        asset_type: "credit_alphanum12",
    },
    CommonAsset {
        code: "yXLM",
        name: "Wrapped XLM",
        issuer: Some("GARDNV3Q7YGT4AKSDF25LT32YSCCW4EV22Y2TV3I2PU2MMXJTEDL5T55"),
        asset_type: "credit_alphanum12",
    },
    CommonAsset {
        code: "BTC",
        name: "Bitcoin",
        issuer: Some("GAUTUYY2THLF7SGITDFMXJVYH3LHDSMGEAKSBU267M2K7A3W543CKUEF"),
        asset_type: "credit_alphanum4",
    },
    CommonAsset {
        code: "ETH",
        name: "Ethereum",
        issuer: Some("GBFXOHVAS43OIWNIO7XLRJAHT3BICFEIKDGBGPTTGDDPCF5GNVI5CKNY"),
        asset_type: "credit_alphanum4",
    },
];

pub fn common_assets() -> &'static [CommonAsset] {
    &COMMON_ASSETS
}

/// Look up a catalogue entry by code (case-sensitive, `yXLM` != `YXLM`).
pub fn find_common_asset(code: &str) -> Option<&'static CommonAsset> {
    COMMON_ASSETS.iter().find(|a| a.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_asset_has_no_issuer() {
        let xlm = find_common_asset("XLM").unwrap();
        assert_eq!(xlm.issuer, None);
        assert_eq!(xlm.asset_type, "native");
    }

    #[test]
    fn credit_asset_type_follows_code_length() {
        for asset in common_assets().iter().filter(|a| a.issuer.is_some()) {
            let expected = if asset.code.len() <= 4 {
                "credit_alphanum4"
            } else {
                "credit_alphanum12"
            };
            assert_eq!(asset.asset_type, expected, "{}", asset.code);
        }
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_value(find_common_asset("USDC").unwrap()).unwrap();
        assert_eq!(json["type"], "credit_alphanum4");
        assert_eq!(json["issuer"], "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN");
    }

    #[test]
    fn unknown_code_is_absent() {
        assert!(find_common_asset("DOGE").is_none());
    }
}
