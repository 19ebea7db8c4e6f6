use anyhow::Context;
use rig::kernel::config::load_api_config;
use rig_logger::Logger;
use rig_server::{Server, init_logger};

#[rig_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg = {
        let _bootstrap = Logger::bootstrap();
        load_api_config(Some("server")).context("Critical: Configuration is malformed")?
    };

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
