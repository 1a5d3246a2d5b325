//! Settlement Backend Binary
//!
//! Serves the entry form and settlement API.
//! Binds BIND_ADDR (default 127.0.0.1:8888) with SERVER_WORKERS workers.

#[tokio::main]
async fn main() -> std::io::Result<()> {
    chip_core::log();
    chip_core::kys();
    chip_server::run().await
}
