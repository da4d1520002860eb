//! `.env` loading lives in its own test binary.
//!
//! `dotenvy` writes straight into the process environment, which a Jail
//! cannot roll back, so nothing else may share this process.

use figment::Jail;
use tick_config::TickConfig;
use tick_core::enums::ViewOrder;

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "TICK_VIEW__ORDER=pending_first\n")?;

        let config = TickConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.view.order, ViewOrder::PendingFirst);
        Ok(())
    });
}
