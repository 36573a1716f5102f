use crate::cli::main_types::{Cli, Commands, ConfigCommands};
use crate::core::banner::BannerRenderer;
use crate::core::catalog::{TitleSet, sample_titles};
use crate::display::{OutputFormat, OutputSink};
use crate::error::{AppError, CliError, ConfigError, StorageError};
use crate::storage::config::Config;
use crate::utils::logging::{VerboseLogger, log_warning};
use std::path::{Path, PathBuf};

/// Per-invocation rendering options collected from global flags
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub width: Option<usize>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub spaced: bool,
    pub display_columns: bool,
}

impl RenderOptions {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let output = match cli.output.as_deref() {
            Some("") => {
                return Err(
                    CliError::InvalidArguments("output path cannot be empty".to_string()).into(),
                );
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(Self {
            width: cli.width,
            output,
            format: cli.format,
            spaced: cli.spaced,
            display_columns: cli.display_columns,
        })
    }
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    options: RenderOptions,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        options: RenderOptions,
        verbose: bool,
    ) -> Self {
        Self {
            config,
            config_path,
            options,
            logger: VerboseLogger::new(verbose),
        }
    }

    pub fn dispatch(&self, command: Option<Commands>) -> Result<(), AppError> {
        match command {
            None | Some(Commands::Sample) => {
                self.logger.log("Rendering built-in sample titles");
                self.render_titles(&sample_titles())
            }
            Some(Commands::Major { titles }) => {
                self.render_titles(&TitleSet::new(titles, Vec::new()))
            }
            Some(Commands::Minor { titles }) => {
                self.render_titles(&TitleSet::new(Vec::new(), titles))
            }
            Some(Commands::File { path }) => {
                self.logger.log_with_prefix("Loading titles", &path);
                let titles = TitleSet::load(Path::new(&path))?;
                if titles.is_empty() {
                    log_warning(&format!("No titles found in {}", path));
                }
                self.render_titles(&titles)
            }
            Some(Commands::Config { command }) => self.handle_config_command(command),
        }
    }

    /// Config defaults with flags layered on top; flags only switch options on
    fn renderer(&self) -> Result<BannerRenderer, AppError> {
        let mut renderer = self.config.renderer(self.options.width)?;
        if self.options.spaced {
            renderer = renderer.with_minor_spacing(true);
        }
        if self.options.display_columns {
            renderer = renderer.with_display_columns(true);
        }
        Ok(renderer)
    }

    fn sink(&self) -> Result<OutputSink, AppError> {
        match &self.options.output {
            Some(path) => {
                self.logger
                    .log_with_prefix("Writing output to", &path.to_string_lossy());
                OutputSink::file(path)
            }
            None => Ok(OutputSink::stdout()),
        }
    }

    fn render_titles(&self, titles: &TitleSet) -> Result<(), AppError> {
        let renderer = self.renderer()?;
        self.logger.log(&format!(
            "Rendering {} major and {} minor titles at width {}",
            titles.major.len(),
            titles.minor.len(),
            renderer.width()
        ));

        let banners = titles.render(&renderer);
        self.sink()?.emit_banners(&banners, self.options.format)
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                self.logger.log("Showing configuration");
                let content = toml::to_string(&self.config)
                    .map_err(|_| StorageError::ConfigSaveFailed)?;
                let lines: Vec<&str> = content.lines().collect();
                OutputSink::stdout().emit_lines(&lines)
            }
            ConfigCommands::Get { key } => {
                self.logger.log_with_prefix("Reading configuration", &key);
                let value = self
                    .config
                    .get_value(&key)
                    .ok_or(ConfigError::UnknownKey { key })?;
                OutputSink::stdout().emit_lines(&[value])
            }
            ConfigCommands::Set { key, value } => {
                self.logger
                    .log(&format!("Setting configuration {} = {:?}", key, value));
                let mut config = self.config.clone();
                config.set_value(&key, &value)?;
                config.save(self.config_path.clone())?;
                OutputSink::stdout().emit_lines(&[format!("Set {} = {:?}", key, value)])
            }
        }
    }
}
