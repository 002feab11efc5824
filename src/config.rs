// Configuration constants for the application

/// Built-in registry: (symbol, label, icon glyph, contract address).
/// Order here is the order the token list shows.
pub const DEFAULT_TOKENS: &[(&str, &str, &str, &str)] = &[
    ("ETH", "Ethereum", "Ξ", "0x049d36570d4e46f48e99674bd3fcc84644ddd6b96f7c741b1562b82f9e004dc7"),
    ("BTC", "Bitcoin", "₿", "0x03fe2b97c1fd336e750087d68b9b867997fd64a2661ff3ca5a7c771641e8e7ac"),
    ("USDT", "Tether", "₮", "0x068f5c6a61780768455de69077e07e89787839bf8166decfbf92b645209c0fb8"),
    ("STRK", "Starknet", "◆", "0x04718f5a0fc34cc1af16a1cdee98ffb20c31f5cd61d6ab07201858f4287c938d"),
    ("USDC", "USD Coin", "$", "0x053c91253bc9682c04929ca02ed00b3e423f6710d2ee7e0d5ebb06f3ecf368a8"),
];

/// Shortcut tokens shown above the list. Static content, not usage history.
pub const DEFAULT_RECENT_TOKENS: [&str; 4] = ["STRK", "ETH", "BTC", "USDT"];

/// Number of recent shortcuts per grid row
pub const RECENT_GRID_COLUMNS: usize = 2;

/// Glyph used when a registry entry has no icon
pub const DEFAULT_ICON: &str = "●";

/// Default swap pair
pub const DEFAULT_FROM_TOKEN: &str = "ETH";
pub const DEFAULT_TO_TOKEN: &str = "USDC";

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;

/// UI settings
pub const LIST_PAGE_SIZE: usize = 5;
pub const MODAL_WIDTH_PERCENT: u16 = 60;
pub const MODAL_HEIGHT_PERCENT: u16 = 80;
pub const MODAL_SUBTITLE: &str = "You can select multiple tokens to auto-swap from";

/// Environment variable holding the registry file path
pub const REGISTRY_ENV: &str = "SWAP_SELECTOR_REGISTRY";
