use preliquidation_bot_interface::types::settlement::Settlement;
use soroban_sdk::{Env, Symbol};

pub(crate) fn preliquidation_executed(e: &Env, settlement: &Settlement) {
    let topics = (
        Symbol::new(e, "preliquidation_executed"),
        settlement.market_id.clone(),
        settlement.borrower.clone(),
    );
    e.events().publish(
        topics,
        (
            settlement.amount,
            settlement.premium,
            settlement.repaid_shares,
            settlement.repaid_assets,
            settlement.seized_assets,
        ),
    );
}
