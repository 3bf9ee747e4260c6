//! Binary entrypoint.
//!
//! The crate is split into layers:
//! - domain: graph model, DFS engine, algorithm ports (pure, synchronous)
//! - usecase: run orchestration + progress events
//! - infrastructure: text loader, Kosaraju detector, NDJSON event printer
//! - interface: CLI wiring

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    graph_scc::interface::cli::run().await
}

#[cfg(test)]
mod tests {
    #[test]
    fn main_returns_usage_error_under_test_harness_args() {
        // Under `cargo test`, env::args() does not match the CLI contract.
        let res = super::main();
        assert!(res.is_err());
    }
}
