//! Chain pair resolution from the service catalog.

use crate::quote::types::{BridgeConfigs, ChainPair, QuoteError, QuoteResult};

/// Pick the source and destination chain names from the catalog.
///
/// Keys are matched case-insensitively by substring. The first key containing
/// `source_marker` becomes `chain_in`; the first other key containing
/// `destination_marker` becomes `chain_out`. Ties resolve in catalog order.
pub fn resolve_chain_pair(
    configs: &BridgeConfigs,
    source_marker: &str,
    destination_marker: &str,
) -> QuoteResult<ChainPair> {
    let source_marker = source_marker.to_lowercase();
    let destination_marker = destination_marker.to_lowercase();

    let mut chain_in: Option<&String> = None;
    let mut chain_out: Option<&String> = None;

    for name in configs.keys() {
        let lname = name.to_lowercase();
        if lname.contains(&source_marker) {
            if chain_in.is_none() {
                chain_in = Some(name);
            }
        } else if lname.contains(&destination_marker) && chain_out.is_none() {
            chain_out = Some(name);
        }
    }

    match (chain_in, chain_out) {
        (Some(chain_in), Some(chain_out)) => Ok(ChainPair {
            chain_in: chain_in.clone(),
            chain_out: chain_out.clone(),
        }),
        (chain_in, chain_out) => Err(QuoteError::ChainPairNotFound {
            chain_in: chain_in.cloned(),
            chain_out: chain_out.cloned(),
        }),
    }
}
