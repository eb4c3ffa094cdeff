//! Decentralised bank contract binding.

use alloy_sol_types::sol;

sol! {
    /// Interface of the deployed decentralised bank contract.
    ///
    /// Method-name casing matches the deployed ABI.
    #[sol(rpc)]
    interface IDecentralisedBank {
        /// Whether an account is registered for `account`
        function accountExists(address account) external view returns (bool);

        /// Stored base-unit balance of `account`
        function getAccountBalance(address account) external view returns (uint256);

        /// Register an account for the caller
        function CreateAccount() external;

        /// Credit the caller's account with the transferred value
        function Deposit() external payable;

        /// Pay out `amount` base units from the caller's stored balance
        function withdraw(uint256 amount) external;

        /// Move `amount` base units from the caller's account to `recipient`
        function transfer(address recipient, uint256 amount) external;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn function_signatures_match_deployed_abi() {
        assert_eq!(IDecentralisedBank::accountExistsCall::SIGNATURE, "accountExists(address)");
        assert_eq!(
            IDecentralisedBank::getAccountBalanceCall::SIGNATURE,
            "getAccountBalance(address)"
        );
        assert_eq!(IDecentralisedBank::CreateAccountCall::SIGNATURE, "CreateAccount()");
        assert_eq!(IDecentralisedBank::DepositCall::SIGNATURE, "Deposit()");
        assert_eq!(IDecentralisedBank::withdrawCall::SIGNATURE, "withdraw(uint256)");
        assert_eq!(IDecentralisedBank::transferCall::SIGNATURE, "transfer(address,uint256)");
    }
}
