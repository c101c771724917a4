use catalog_store::{demo_catalog, CatalogStore};
use std::net::SocketAddr;

// This main function is the entry point when running `cargo run -p web-server`.
// It serves the demo catalog; the `insights` binary is the full entry point
// with configuration and catalog-file support.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let store = CatalogStore::from_data(demo_catalog());
    web_server::run_server(addr, store).await
}
