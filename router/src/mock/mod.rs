//! Collaborators of the router, deployable in `motsu` tests.
#![allow(missing_docs, unreachable_pub, clippy::unused_self)]

pub(crate) mod bridge;
pub(crate) mod erc20;
pub(crate) mod pool_manager;
pub(crate) mod rejecter;

pub(crate) use bridge::BridgeMock;
pub(crate) use erc20::Erc20Mock;
pub(crate) use pool_manager::PoolManagerMock;
pub(crate) use rejecter::NativeRejecterMock;

mod token {
    #![allow(missing_docs)]
    alloy_sol_types::sol! {
        interface IErc20 {
            function balanceOf(address account) external view returns (uint256);
            function transfer(address to, uint256 value) external returns (bool);
            function transferFrom(address from, address to, uint256 value) external returns (bool);
        }
    }
}

pub(crate) use token::IErc20;
