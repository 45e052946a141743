use std::path::PathBuf;
use std::str::FromStr;

/// Log output format for the inspect tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{other}`"),
        }
    }
}

/// Inspect tool configuration, built from CLI arguments and environment
/// variables.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectConfig {
    /// Payload files to decode, in the order given.
    pub page_paths: Vec<PathBuf>,
    pub log_format: LogFormat,
}

impl InspectConfig {
    /// Load configuration from the process arguments and environment.
    ///
    /// | Env Var           | Default  |
    /// |-------------------|----------|
    /// | `MOVIE_PAGE_PATH` | --       |
    /// | `LOG_FORMAT`      | `pretty` |
    ///
    /// Positional arguments take precedence over `MOVIE_PAGE_PATH`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var("MOVIE_PAGE_PATH").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    /// Build a configuration from already-collected inputs.
    pub fn from_parts<I>(
        args: I,
        page_path_var: Option<String>,
        log_format_var: Option<String>,
    ) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut page_paths: Vec<PathBuf> = args
            .into_iter()
            .filter(|a| !a.trim().is_empty())
            .map(PathBuf::from)
            .collect();

        if page_paths.is_empty() {
            match page_path_var.filter(|p| !p.trim().is_empty()) {
                Some(path) => page_paths.push(PathBuf::from(path)),
                None => anyhow::bail!(
                    "no payload files given: pass paths as arguments or set MOVIE_PAGE_PATH"
                ),
            }
        }

        let log_format = match log_format_var {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            page_paths,
            log_format,
        })
    }
}
