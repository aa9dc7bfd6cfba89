use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use tinylink_shortener::DEFAULT_MAX_ATTEMPTS;

pub const LISTEN_ADDR_ENV: &str = "SERVER_ADDRESS";
pub const BASE_URL_ENV: &str = "BASE_URL";
pub const GENERATOR_ENV: &str = "TINYLINK_GENERATOR";
pub const MAX_ATTEMPTS_ENV: &str = "TINYLINK_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "TINYLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    /// Uniformly random 8-symbol codes.
    #[value(name = "random")]
    Random,
    /// Sequential codes: 0, 1, ..., z, 10, ...
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinylink", about = "URL shortener HTTP server")]
pub struct CLI {
    /// Address the HTTP server listens on. `SERVER_ADDRESS` wins over this flag.
    #[arg(short = 'a', long, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: String,

    /// Prefix of the short URLs handed out to clients. `BASE_URL` wins over
    /// this flag.
    #[arg(short = 'b', long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Codes tried per URL before giving up on collisions.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    /// Parses the process arguments and environment.
    pub fn load() -> Result<Self, clap::Error> {
        Self::load_from(std::env::args_os(), |key| std::env::var(key).ok())
    }

    /// Parses `args`, then lets non-empty `SERVER_ADDRESS` and `BASE_URL`
    /// values from `lookup` replace `-a` and `-b`.
    pub fn load_from<I, T, F>(args: I, lookup: F) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
        F: Fn(&str) -> Option<String>,
    {
        let mut cli = Self::try_parse_from(args)?;

        let env = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(listen_addr) = env(LISTEN_ADDR_ENV) {
            cli.listen_addr = listen_addr;
        }
        if let Some(base_url) = env(BASE_URL_ENV) {
            cli.base_url = base_url;
        }

        Ok(cli)
    }
}
