use crate::events::AppEvent;
use async_channel::Sender;
use dialkit::format::FormatOptions;
use dialkit::settings::Settings;
use dialkit::style::{DialStyle, HandPalette, Theme};
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Startup appearance and text formatting. Runtime changes made in the widget
/// are never written back here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub dial_style: DialStyle,
    pub hand_palette: HandPalette,
    pub show_settings: bool,
    pub format: FormatOptions,
}

impl Config {
    pub fn settings(&self) -> Settings {
        Settings {
            theme: self.theme,
            dial_style: self.dial_style,
            hand_palette: self.hand_palette,
            show_settings: self.show_settings,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "clockface").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build(file: impl config::Source + Send + Sync + 'static) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("CLOCKFACE")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    build(config::File::from(get_config_path()?).required(false))
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(config::File::from(path).required(true))
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

/// Writes the commented template config if no config file exists yet.
pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher error: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return Ok(());
    };
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if touches_config(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit::format::LocaleTag;
    use notify::event::{CreateKind, ModifyKind};

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "theme": "Dark",
            "dial_style": "XII",
            "hand_palette": "ocean",
            "format": { "locale": "en_US" }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.dial_style, DialStyle::Roman);
        assert_eq!(config.hand_palette, HandPalette::Ocean);
        assert!(!config.show_settings);
        assert_eq!(config.format.locale, LocaleTag::new("en_US"));
        assert_eq!(config.format.time, FormatOptions::default().time);
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(serde_json::from_str::<Config>(r#"{"dial_style": "hex"}"#).is_err());
    }

    #[test]
    fn test_default_template_matches_defaults() {
        let dir = std::env::temp_dir().join(format!("clockface-test-{}", std::process::id()));
        fs_err::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs_err::write(&path, DEFAULT_CONFIG).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config, Config::default());

        fs_err::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            theme: Theme::Dark,
            show_settings: true,
            ..Config::default()
        };
        let settings = config.settings();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.dial_style, DialStyle::Arabic);
        assert!(settings.show_settings);
    }

    #[test]
    fn test_only_config_file_events_reload() {
        let config_path = PathBuf::from("/home/u/.config/clockface/config.toml");

        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(config_path.clone());
        assert!(touches_config(&modify, &config_path));

        let other = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/home/u/.config/clockface/notes.txt"));
        assert!(!touches_config(&other, &config_path));

        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any))
            .add_path(config_path.clone());
        assert!(!touches_config(&access, &config_path));
    }
}
