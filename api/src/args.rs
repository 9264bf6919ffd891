use clap::{ArgAction, Parser};
use ferrisfit_core::domain::common::{
    ChatConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_SESSION_IDLE_TTL_SECS,
    FerrisFitConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ferrisfit-api", version, about = "FerrisFit health planner API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub chat: ChatArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on /metrics
    #[arg(
        long = "server-metrics",
        env = "SERVER_METRICS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = DEFAULT_GEMINI_BASE_URL
    )]
    pub gemini_base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ChatArgs {
    /// Seconds a chat session may stay idle before it is dropped
    #[arg(
        long = "chat-session-ttl-secs",
        env = "CHAT_SESSION_TTL_SECS",
        default_value_t = DEFAULT_SESSION_IDLE_TTL_SECS
    )]
    pub session_ttl_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FerrisFitConfig {
    fn from(args: Args) -> Self {
        FerrisFitConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            chat: ChatConfig {
                session_idle_ttl_secs: args.chat.session_ttl_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["ferrisfit-api", "--gemini-api-key", "secret"]).unwrap();

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.llm.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(args.server.metrics);

        let config = FerrisFitConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
    }

    #[test]
    fn test_parse_origins_and_flags() {
        let args = Args::try_parse_from([
            "ferrisfit-api",
            "--gemini-api-key",
            "secret",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
            "--server-metrics",
            "false",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(!args.server.metrics);
    }

    #[test]
    fn test_session_ttl_reaches_config() {
        let args = Args::try_parse_from([
            "ferrisfit-api",
            "--gemini-api-key",
            "secret",
            "--chat-session-ttl-secs",
            "120",
        ])
        .unwrap();

        let config = FerrisFitConfig::from(args);
        assert_eq!(config.chat.session_idle_ttl_secs, 120);
    }
}
