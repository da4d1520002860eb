use std::path::PathBuf;

use figment::Jail;
use tick_config::TickConfig;
use tick_core::enums::{StorageFormat, ViewOrder};

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("TICK_STORAGE__PATH", "from-env.txt");
        jail.set_env("TICK_VIEW__ORDER", "pending_first");

        let config = TickConfig::load().expect("config loads");
        assert_eq!(config.storage.path, PathBuf::from("from-env.txt"));
        assert_eq!(config.storage.resolved_format(), StorageFormat::Text);
        assert_eq!(config.view.order, ViewOrder::PendingFirst);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tick")?;
        jail.create_file(
            ".tick/config.toml",
            r#"
[storage]
path = "from-toml.json"
format = "json"
"#,
        )?;
        jail.set_env("TICK_STORAGE__FORMAT", "text");

        let config = TickConfig::load().expect("config loads");
        assert_eq!(config.storage.path, PathBuf::from("from-toml.json"));
        assert_eq!(config.storage.format, StorageFormat::Text);
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_ignored_by_config() {
    Jail::expect_with(|jail| {
        jail.set_env("TICK_LOG", "tick_store=debug");

        let config = TickConfig::load().expect("config loads");
        assert_eq!(config.storage.path, PathBuf::from("todos.json"));
        Ok(())
    });
}
