use crate::data::{Token, TokenRegistry};

/// Shorten `label` to at most `max` characters, ending in "..." when cut.
pub fn truncate_label(label: &str, max: usize) -> String {
    let count = label.chars().count();
    if count <= max {
        return label.to_string();
    }
    if max <= 3 {
        return label.chars().take(max).collect();
    }
    let mut truncated: String = label.chars().take(max - 3).collect();
    truncated.push_str("...");
    truncated
}

/// `0x049d36…4dc7` style abbreviation of a contract address
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// `SYMBOL<TAB>label` rows for printing a token list
pub fn token_rows(registry: &TokenRegistry, tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            let label = registry.info(token).map_or(token.as_str(), |info| info.label.as_str());
            format!("{token}\t{label}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_label("Ethereum", 20), "Ethereum");
        assert_eq!(truncate_label("Ethereum", 6), "Eth...");
        assert_eq!(truncate_label("Ξthereum", 2), "Ξt");
    }

    #[test]
    fn shortens_long_addresses_only() {
        assert_eq!(shorten_address("0x1234"), "0x1234");
        assert_eq!(
            shorten_address("0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7"),
            "0x049d36…4dc7"
        );
    }

    #[test]
    fn rows_pair_symbol_and_label() {
        let registry = TokenRegistry::builtin().unwrap();
        let rows = token_rows(&registry, &registry.tokens()[..2]);
        assert_eq!(rows, vec!["ETH\tEthereum".to_string(), "BTC\tBitcoin".to_string()]);
    }
}
