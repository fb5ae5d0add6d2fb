use serde::Deserialize;
use std::fs;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7071";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_REPO_OWNER: &str = "laguirre06";
pub const DEFAULT_REPO_NAME: &str = "velero-dashboard-ftd";
pub const DEFAULT_WORKFLOW_ID: &str = "delete-backup.yml";
pub const DEFAULT_REF: &str = "main";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Falha ao ler {path}: {source}")]
    Leitura {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Falha ao parsear {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Valor inválido para {var}: {value}")]
    ValorInvalido { var: &'static str, value: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub github_token: Option<String>,
    pub bind_addr: String,
    pub github_api_url: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub workflow_id: String,
    pub git_ref: String,
    pub timeout_secs: u64,
    pub logs_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            github_api_url: DEFAULT_API_URL.to_string(),
            repo_owner: DEFAULT_REPO_OWNER.to_string(),
            repo_name: DEFAULT_REPO_NAME.to_string(),
            workflow_id: DEFAULT_WORKFLOW_ID.to_string(),
            git_ref: DEFAULT_REF.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            logs_enabled: true,
        }
    }
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (chame `dotenv` antes).
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::default().with_env()
    }

    /// Aplica as variáveis de ambiente por cima desta configuração.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.overlay(|var| std::env::var(var).ok())
    }

    /// Monta a configuração a partir de uma função de consulta, sem tocar no ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Config::default().overlay(lookup)
    }

    /// Sobrescreve só os campos que a consulta conhece; o resto fica como está.
    pub fn overlay<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("GITHUB_TOKEN") {
            self.github_token = Some(token);
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(url) = lookup("GITHUB_API_URL") {
            self.github_api_url = url;
        }
        if let Some(owner) = lookup("GITHUB_REPO_OWNER") {
            self.repo_owner = owner;
        }
        if let Some(repo) = lookup("GITHUB_REPO_NAME") {
            self.repo_name = repo;
        }
        if let Some(workflow) = lookup("GITHUB_WORKFLOW_ID") {
            self.workflow_id = workflow;
        }
        if let Some(git_ref) = lookup("GITHUB_REF") {
            self.git_ref = git_ref;
        }
        if let Some(value) = lookup("DISPATCH_TIMEOUT_SECS") {
            let secs = value.trim().parse::<u64>().ok().filter(|secs| *secs > 0);
            self.timeout_secs =
                secs.ok_or(ConfigError::ValorInvalido { var: "DISPATCH_TIMEOUT_SECS", value })?;
        }
        if let Some(value) = lookup("LOGS_ENABLED") {
            self.logs_enabled = parse_bool(&value)
                .ok_or(ConfigError::ValorInvalido { var: "LOGS_ENABLED", value })?;
        }

        Ok(self)
    }

    /// Carrega a configuração de um arquivo JSON; campos ausentes ficam com o padrão.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Leitura {
            path: path.to_string(),
            source,
        })?;
        let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        // Timeout zero faria todo dispatch falhar na hora
        if config.timeout_secs == 0 {
            return Err(ConfigError::ValorInvalido {
                var: "timeout_secs",
                value: config.timeout_secs.to_string(),
            });
        }
        Ok(config)
    }

    /// Token vazio conta como não configurado.
    pub fn token(&self) -> Option<&str> {
        self.github_token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn dispatch_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/workflows/{}/dispatches",
            self.github_api_url.trim_end_matches('/'),
            self.repo_owner,
            self.repo_name,
            self.workflow_id
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
