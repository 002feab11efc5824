//! Drives the public modal API the way a host screen would.

use std::{cell::RefCell, rc::Rc, sync::Arc};

use swap_selector::{
    filter_tokens, EntryVariant, ModalProps, ModalState, SwapSide, Token, TokenModal, TokenRegistry,
};

#[derive(Debug, PartialEq)]
enum Callback {
    Selected(SwapSide, Token),
    Closed(SwapSide),
}

fn registry() -> Arc<TokenRegistry> {
    let json = r#"{
        "tokens": [
            { "symbol": "ETH", "label": "Ethereum" },
            { "symbol": "BTC", "label": "Bitcoin" },
            { "symbol": "USDT", "label": "Tether" },
            { "symbol": "STRK", "label": "Starknet" },
            { "symbol": "USDC", "label": "USD Coin" }
        ],
        "recent": ["STRK", "ETH", "BTC", "USDT"]
    }"#;
    Arc::new(TokenRegistry::from_json(json).unwrap())
}

fn open(registry: &Arc<TokenRegistry>, from: bool, log: &Rc<RefCell<Vec<Callback>>>) -> TokenModal {
    let side = SwapSide::from_flag(from);
    let on_close = {
        let log = Rc::clone(log);
        move || log.borrow_mut().push(Callback::Closed(side))
    };
    let on_select = {
        let log = Rc::clone(log);
        move |token| log.borrow_mut().push(Callback::Selected(side, token))
    };
    TokenModal::new(Arc::clone(registry), ModalProps::with_flag(from, on_close, on_select))
}

fn symbols(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::as_str).collect()
}

#[test]
fn from_and_to_modals_keep_independent_state() {
    let registry = registry();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut from = open(&registry, true, &log);
    let mut to = open(&registry, false, &log);

    from.set_query("us");
    to.set_query("t");

    assert_eq!(symbols(from.visible_tokens()), vec!["USDT", "USDC"]);
    assert_eq!(symbols(to.visible_tokens()), vec!["ETH", "BTC", "USDT", "STRK"]);

    let usdc = from.listed_entries().into_iter().find(|e| e.token == "USDC").unwrap();
    assert!(from.activate(&usdc));
    assert!(to.dismiss());

    let usdc = registry.resolve("USDC").unwrap();
    assert_eq!(
        *log.borrow(),
        vec![
            Callback::Selected(SwapSide::From, usdc),
            Callback::Closed(SwapSide::From),
            Callback::Closed(SwapSide::To),
        ]
    );
    assert!(matches!(from.state(), ModalState::Selected(t) if t == "USDC"));
    assert_eq!(to.state(), &ModalState::Dismissed);
}

#[test]
fn unmatched_query_keeps_recent_shortcuts_usable() {
    let registry = registry();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut modal = open(&registry, false, &log);

    modal.set_query("xyz");
    assert!(modal.visible_tokens().is_empty());

    let recent = modal.recent_entries();
    assert_eq!(recent.len(), 4);
    assert!(recent.iter().all(|e| e.variant == EntryVariant::Recent));
    assert_eq!(
        recent.iter().map(|e| e.token.as_str()).collect::<Vec<_>>(),
        vec!["STRK", "ETH", "BTC", "USDT"]
    );

    assert!(modal.activate(&recent[2]));
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(log.borrow()[0], Callback::Selected(SwapSide::To, registry.resolve("BTC").unwrap()));
}

#[test]
fn filter_is_a_pure_function_of_registry_and_query() {
    let registry = registry();
    let once = filter_tokens(&registry, "S");
    let twice = filter_tokens(&registry, "S");
    assert_eq!(once, twice);
    assert_eq!(symbols(&once), vec!["USDT", "STRK", "USDC"]);
    assert_eq!(filter_tokens(&registry, ""), registry.tokens());
}
