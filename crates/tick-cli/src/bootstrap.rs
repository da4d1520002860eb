use anyhow::Context;
use tick_config::TickConfig;
use tick_core::enums::{StorageFormat, ViewOrder};
use tick_store::{FileStore, TodoService};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;

/// Load layered configuration (`.env`, TOML files, `TICK_*`), then apply flags.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TickConfig> {
    let mut config = TickConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_flags(&mut config, flags)?;
    Ok(config)
}

/// Command-line flags win over every configuration source.
pub fn apply_flags(config: &mut TickConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(file) = &flags.file {
        config.storage.path = file.into();
    }
    if let Some(raw) = &flags.storage {
        config.storage.format = parse_enum::<StorageFormat>(raw, "storage")?;
    }
    if let Some(raw) = &flags.order {
        config.view.order = parse_enum::<ViewOrder>(raw, "order")?;
    }

    config.validate().context("invalid command-line flags")?;
    Ok(())
}

/// Open the task file named by the configuration.
pub fn open_service(config: &TickConfig) -> anyhow::Result<TodoService<FileStore>> {
    let store = FileStore::new(&config.storage.path, config.storage.format);
    tracing::debug!(
        path = %store.path().display(),
        format = %store.format(),
        order = %config.view.order,
        "opening task file"
    );

    TodoService::open(store, config.view.order).with_context(|| {
        format!(
            "failed to load tasks from {}",
            config.storage.path.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tick_core::enums::Priority;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            file: None,
            storage: None,
            order: None,
            format: OutputFormat::Table,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn no_flags_keep_config() {
        let mut config = TickConfig::default();
        apply_flags(&mut config, &flags()).unwrap();

        assert_eq!(config.storage.path, PathBuf::from("todos.json"));
        assert_eq!(config.view.order, ViewOrder::Priority);
    }

    #[test]
    fn flags_override_config() {
        let mut config = TickConfig::default();
        let flags = GlobalFlags {
            file: Some("work.txt".into()),
            storage: Some("json".into()),
            order: Some("pending-first".into()),
            ..flags()
        };
        apply_flags(&mut config, &flags).unwrap();

        assert_eq!(config.storage.path, PathBuf::from("work.txt"));
        assert_eq!(config.storage.format, StorageFormat::Json);
        assert_eq!(config.view.order, ViewOrder::PendingFirst);
    }

    #[test]
    fn unknown_flag_values_fail() {
        let mut config = TickConfig::default();
        let bad_order = GlobalFlags {
            order: Some("newest".into()),
            ..flags()
        };
        let err = apply_flags(&mut config, &bad_order).unwrap_err();
        assert!(err.to_string().contains("invalid order 'newest'"));

        let bad_storage = GlobalFlags {
            storage: Some("yaml".into()),
            ..flags()
        };
        assert!(apply_flags(&mut config, &bad_storage).is_err());
    }

    #[test]
    fn empty_file_flag_fails_validation() {
        let mut config = TickConfig::default();
        let empty = GlobalFlags {
            file: Some(String::new()),
            ..flags()
        };
        assert!(apply_flags(&mut config, &empty).is_err());
    }

    #[test]
    fn open_service_reads_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("todos.txt");
        std::fs::write(&path, "[!] Buy milk\n[x] Pay rent\n").unwrap();

        let mut config = TickConfig::default();
        config.storage.path = path;
        let service = open_service(&config).unwrap();

        assert_eq!(service.len(), 2);
        assert_eq!(service.store().format(), StorageFormat::Text);
        assert!(service.tasks().iter().all(|t| t.priority == Priority::None));
    }
}
