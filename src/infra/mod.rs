//! Adapters to the outside world: the JSON-RPC endpoint, the ABI file and
//! the smartcore regressor.

pub mod abi;
pub mod forest;
pub mod rpc;
pub mod status;
