use clap::Parser;
use std::path::PathBuf;

use crate::app::SwapSide;
use crate::config::REGISTRY_ENV;

#[derive(Parser)]
#[command(name = "swap-selector")]
#[command(about = "Pick the from/to tokens of a swap")]
pub struct Cli {
    /// JSON token registry to use instead of the built-in list
    #[arg(short, long, env = REGISTRY_ENV)]
    pub registry: Option<PathBuf>,

    /// Initial "from" token (e.g. "ETH")
    #[arg(short, long)]
    pub from: Option<String>,

    /// Initial "to" token (e.g. "USDC")
    #[arg(short, long)]
    pub to: Option<String>,

    /// Print the tokens matching QUERY and exit
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Start with the "from" or "to" token modal open
    #[arg(long)]
    pub open: Option<SwapSide>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pair_and_modal_side() {
        let cli = Cli::try_parse_from(["swap-selector", "--from", "strk", "-t", "eth", "--open", "To"]).unwrap();
        assert_eq!(cli.from.as_deref(), Some("strk"));
        assert_eq!(cli.to.as_deref(), Some("eth"));
        assert_eq!(cli.open, Some(SwapSide::To));
        assert!(cli.filter.is_none());
    }

    #[test]
    fn rejects_unknown_modal_side() {
        assert!(Cli::try_parse_from(["swap-selector", "--open", "sideways"]).is_err());
    }
}
