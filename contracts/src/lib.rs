/*!
# Swap-then-Bridge building blocks for Stylus

Types, collaborator interfaces and storage components used by the
swap-then-bridge router: a contract that swaps on a Uniswap V4 pool manager
and optionally deposits the output into a cross-chain bridge for a recipient
on the destination network.

- [`uniswap::v4`] - pool key and swap parameter types, the pool manager
  interface and a tagged view over balance deltas.
- [`bridge`] - deposit entry points of an OP-style standard bridge.
- [`registry`] - owner-managed mapping from local tokens to their
  destination network counterparts.

```ignore
use swap_bridge_stylus::registry::TokenRegistry;
use openzeppelin_stylus::access::ownable::Ownable;

#[entrypoint]
#[storage]
struct MyRouter {
    ownable: Ownable,
    registry: TokenRegistry,
}
```
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod bridge;
pub mod registry;
pub mod uniswap;
