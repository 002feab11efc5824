use serde::Deserialize;
use std::{collections::HashSet, fmt, fs, path::Path};
use cli_log::*;

use crate::config::{DEFAULT_ICON, DEFAULT_RECENT_TOKENS, DEFAULT_TOKENS};
use crate::error::RegistryError;

/// Ticker identifier of a swappable asset.
///
/// Only [`TokenRegistry`] mints these, so any `Token` in the UI names a
/// registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    fn new(symbol: &str) -> Self {
        Self(symbol.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenInfo {
    pub symbol: Token,
    pub label: String,
    pub icon: String,
    pub address: Option<String>,
}

/// One token as written in a registry file
#[derive(Debug, Clone, Deserialize)]
pub struct TokenSpec {
    pub symbol: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    tokens: Vec<TokenSpec>,
    #[serde(default)]
    recent: Option<[String; 4]>,
}

/// The fixed shortcut row shown above the token list
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTokens([Token; 4]);

impl RecentTokens {
    pub fn as_slice(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Ordered, read-only set of known tokens plus the recent shortcuts.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    entries: Vec<TokenInfo>,
    recent: RecentTokens,
}

impl TokenRegistry {
    pub fn new<S: AsRef<str>>(specs: Vec<TokenSpec>, recent: [S; 4]) -> Result<Self, RegistryError> {
        if specs.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::with_capacity(specs.len());
        let mut entries = Vec::with_capacity(specs.len());
        for (position, spec) in specs.into_iter().enumerate() {
            let symbol = spec.symbol.trim();
            if symbol.is_empty() {
                return Err(RegistryError::EmptySymbol(position));
            }
            // Filtering is case-insensitive, so "eth" and "ETH" would be indistinguishable
            if !seen.insert(symbol.to_lowercase()) {
                return Err(RegistryError::DuplicateSymbol(symbol.to_string()));
            }
            entries.push(TokenInfo {
                symbol: Token::new(symbol),
                label: spec.label,
                icon: spec.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
                address: spec.address,
            });
        }

        let find = |symbol: &str| {
            entries
                .iter()
                .find(|info| info.symbol == symbol)
                .map(|info| info.symbol.clone())
                .ok_or_else(|| RegistryError::UnknownRecent(symbol.to_string()))
        };
        let [a, b, c, d] = recent;
        let recent = RecentTokens([
            find(a.as_ref())?,
            find(b.as_ref())?,
            find(c.as_ref())?,
            find(d.as_ref())?,
        ]);

        Ok(Self { entries, recent })
    }

    /// Registry compiled into the binary
    pub fn builtin() -> Result<Self, RegistryError> {
        let specs = DEFAULT_TOKENS
            .iter()
            .map(|&(symbol, label, icon, address)| TokenSpec {
                symbol: symbol.to_string(),
                label: label.to_string(),
                icon: Some(icon.to_string()),
                address: Some(address.to_string()),
            })
            .collect();
        Self::new(specs, DEFAULT_RECENT_TOKENS)
    }

    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::from_file_contents(file)
    }

    /// Load a JSON registry file. A missing `recent` list falls back to the defaults.
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: RegistryFile = serde_json::from_str(&contents).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_file_contents(file)?;
        info!("Loaded {} tokens from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Load from `path` if given, the built-in table otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, RegistryError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    fn from_file_contents(file: RegistryFile) -> Result<Self, RegistryError> {
        match file.recent {
            Some(recent) => Self::new(file.tokens, recent),
            None => Self::new(file.tokens, DEFAULT_RECENT_TOKENS),
        }
    }

    pub fn entries(&self) -> &[TokenInfo] {
        &self.entries
    }

    /// Every symbol in registry order
    pub fn symbols(&self) -> impl Iterator<Item = &Token> {
        self.entries.iter().map(|info| &info.symbol)
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.symbols().cloned().collect()
    }

    pub fn recent(&self) -> &RecentTokens {
        &self.recent
    }

    pub fn info(&self, token: &Token) -> Option<&TokenInfo> {
        self.entries.iter().find(|info| &info.symbol == token)
    }

    /// Case-insensitive lookup of a user-typed symbol
    pub fn resolve(&self, symbol: &str) -> Result<Token, RegistryError> {
        let wanted = symbol.trim().to_lowercase();
        self.symbols()
            .find(|token| token.as_str().to_lowercase() == wanted)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownSymbol(symbol.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
