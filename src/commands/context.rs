use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::Result;
use crate::input::SpecParser;
use crate::output::{ColorMode, ErrorOutput, OutputFormat};
use crate::palette::{self, ColorRegistry};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Loads the configuration, honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if an explicit or discovered config cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Everything a command needs besides its own arguments.
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
    pub parser: SpecParser,
    pub diagnostics: ErrorOutput,
    pub verbose: u8,
    pub quiet: bool,
}

impl AppContext {
    /// Builds the context from parsed flags and a loaded config.
    #[must_use]
    pub fn new(cli: &Cli, config: Config) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            config,
            parser: SpecParser::new(),
            diagnostics: ErrorOutput::new(color_choice_to_mode(cli.color)),
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }

    /// Loads config and extends the shared color allow-list from it and from
    /// `--add-color`.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded.
    pub fn init(cli: &Cli) -> Result<Self> {
        let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
        let ctx = Self::new(cli, loaded.config);

        if let Some(source) = &loaded.source {
            ctx.note(&format!("config loaded from {}", source.display()));
        }

        ctx.register_colors(palette::global(), &cli.add_color);
        Ok(ctx)
    }

    /// Appends config extras, then command-line colors, to `registry`.
    pub fn register_colors(&self, registry: &ColorRegistry, extra: &[String]) {
        for color in &self.config.palette.extra {
            self.warn_if_duplicate(registry, color);
        }
        self.config.apply_palette(registry);

        for color in extra {
            self.warn_if_duplicate(registry, color);
            registry.add(color.clone());
            self.note(&format!("added color '{color}'"));
        }
    }

    fn warn_if_duplicate(&self, registry: &ColorRegistry, color: &str) {
        if registry.contains(color) && self.verbose > 0 && !self.quiet {
            self.diagnostics
                .print_warning(&format!("color '{color}' is already allowed"));
        }
    }

    /// Color for specs that do not name one.
    #[must_use]
    pub fn default_color(&self) -> &str {
        &self.config.defaults.color
    }

    /// Prints a note on stderr when verbose and not quiet.
    pub fn note(&self, message: &str) {
        if self.verbose > 0 && !self.quiet {
            self.diagnostics.print_note(message);
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
