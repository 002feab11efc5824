//! Type definitions for the application

use strum::{Display, EnumString};

use crate::data::Token;

/// Which leg of the swap a modal picks a token for
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SwapSide {
    #[default]
    From,
    To,
}

impl SwapSide {
    /// `true` is the "from" direction
    pub fn from_flag(from: bool) -> Self {
        if from { Self::From } else { Self::To }
    }

    pub fn is_from(self) -> bool {
        self == Self::From
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::From => "Swap From",
            Self::To => "Swap To",
        }
    }
}

/// Where a token entry is shown. Rendering differs, behaviour does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryVariant {
    Recent,
    Listed,
}

impl EntryVariant {
    pub fn is_bordered(self) -> bool {
        matches!(self, Self::Recent)
    }
}

/// A single selectable token, either in the recent grid or the token list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub token: Token,
    pub variant: EntryVariant,
}

impl TokenEntry {
    pub fn recent(token: Token) -> Self {
        Self { token, variant: EntryVariant::Recent }
    }

    pub fn listed(token: Token) -> Self {
        Self { token, variant: EntryVariant::Listed }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Selected(Token),
    Dismissed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    #[default]
    Search,
    Recent,
    List,
}

impl ModalFocus {
    pub fn previous(self) -> Self {
        match self {
            Self::Search => Self::List,
            Self::Recent => Self::Search,
            Self::List => Self::Recent,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Recent,
            Self::Recent => Self::List,
            Self::List => Self::Search,
        }
    }
}

/// Messages relayed from an open modal to the swap screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    TokenSelected { side: SwapSide, token: Token },
    ModalClosed { side: SwapSide },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn side_flag_and_copy() {
        assert_eq!(SwapSide::from_flag(true), SwapSide::From);
        assert_eq!(SwapSide::from_flag(false), SwapSide::To);
        assert_eq!(SwapSide::To.title(), "Swap To");
        assert_eq!(SwapSide::From.opposite(), SwapSide::To);
        assert_eq!(SwapSide::from_str("TO").unwrap(), SwapSide::To);
        assert_eq!(SwapSide::From.to_string(), "from");
    }

    #[test]
    fn focus_cycles_through_every_zone() {
        let mut focus = ModalFocus::default();
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, ModalFocus::Search);
        assert_eq!(ModalFocus::Search.previous(), ModalFocus::List);
    }

    #[test]
    fn only_recent_entries_are_bordered() {
        assert!(EntryVariant::Recent.is_bordered());
        assert!(!EntryVariant::Listed.is_bordered());
    }
}
