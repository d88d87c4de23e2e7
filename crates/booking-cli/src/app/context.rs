//! Application context for the Bookings CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file so handlers do
//! not re-read it or thread paths around.

use std::path::PathBuf;

use chrono_tz::Tz;
use once_cell::unsync::OnceCell;

use booking_core::services::gemini::{GeminiClient, GeminiConfig};
use booking_core::{FileBlobStore, LedgerStore};

use crate::cli::Cli;
use crate::config::{read_config, BookingsConfig, GeminiSection};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{missing_store_message, resolve_config_path, resolve_store_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<BookingsConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Read once.
    pub fn config(&self) -> anyhow::Result<Option<&BookingsConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok::<_, anyhow::Error>(None);
            }
            tracing::debug!(path = %path.display(), "reading config");
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    pub fn store_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_store_dir(self.cli, self.config()?)
    }

    /// Open the ledger in the resolved store directory.
    ///
    /// The directory must already exist; `bookings init` creates it.
    pub fn open_ledger(&self) -> anyhow::Result<LedgerStore<FileBlobStore>> {
        let dir = self.store_dir()?;
        if !dir.is_dir() {
            return Err(CliError::not_found(
                missing_store_message(&dir),
                "Hint: Run `bookings init`, or pass --store <DIR>.",
            )
            .into());
        }
        let store = FileBlobStore::open(&dir)?;
        Ok(LedgerStore::open(store))
    }

    /// Configured display timezone. Invalid names fall back to UTC.
    pub fn timezone(&self) -> Option<Tz> {
        let name = self.config().ok()??.ui.timezone.as_deref()?;
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                tracing::warn!(timezone = name, "unknown timezone in config; using UTC");
                None
            }
        }
    }

    /// UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color).with_timezone(self.timezone())
    }

    /// Build the Gemini client from config and environment.
    pub fn gemini_client(&self) -> anyhow::Result<GeminiClient> {
        let default_section = GeminiSection::default();
        let section = match self.config()? {
            Some(config) => &config.gemini,
            None => &default_section,
        };
        let config = GeminiConfig::from_env(&section.api_key_env).map_err(|_| {
            CliError::external_with_hint(
                format!("{} is not set", section.api_key_env),
                format!(
                    "Hint: export {}=<your Gemini API key>",
                    section.api_key_env
                ),
            )
        })?;
        let mut config = config.with_model(&section.model);
        if let Some(base_url) = section.base_url.as_deref() {
            config = config.with_base_url(base_url);
        }
        GeminiClient::new(config).map_err(|e| {
            CliError::ExternalService {
                message: e.to_string(),
                hint: None,
            }
            .into()
        })
    }
}
