use std::sync::Once;
use env_logger::Env;
use log::{info, warn, error, LevelFilter};
use uuid::Uuid;

use crate::config::Config;

static INIT: Once = Once::new();

/// Inicializa o logger uma única vez. Com `logs_enabled = false` nada é emitido,
/// nem mesmo com RUST_LOG definido.
pub fn init_logging(config: &Config) {
    let enabled = config.logs_enabled;
    INIT.call_once(|| {
        if enabled {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        } else {
            env_logger::Builder::new().filter_level(LevelFilter::Off).init();
        }
    });
}

pub fn log_relay_iniciado(addr: &str, url: &str) {
    info!("[RELAY] Escutando em {} - workflow: {}", addr, url);
}

pub fn log_relay_requisicao(id: &Uuid) {
    info!("[RELAY] [{}] Pedido de exclusão de backup recebido", id);
}

pub fn log_relay_pedido_invalido(id: &Uuid) {
    warn!("[RELAY] [{}] Pedido sem environment ou backup_name", id);
}

pub fn log_relay_token_ausente(id: &Uuid) {
    error!("[RELAY] [{}] GITHUB_TOKEN não configurado", id);
}

pub fn log_relay_disparo(id: &Uuid, backup_name: &str, environment: &str) {
    info!("[RELAY] [{}] Disparando workflow para {} em {}", id, backup_name, environment);
}

pub fn log_relay_aceito(id: &Uuid, backup_name: &str, environment: &str) {
    info!("[RELAY] [{}] Workflow aceito para {} em {}", id, backup_name, environment);
}

pub fn log_relay_recusado(id: &Uuid, status: u16, body: &str) {
    error!("[RELAY] [{}] Falha ao disparar workflow: {} - {}", id, status, body);
}

pub fn log_relay_corpo_ilegivel(status: u16, erro: &str) {
    warn!("[RELAY] Falha ao ler corpo da resposta do GitHub (status {}): {}", status, erro);
}

pub fn log_relay_erro(id: &Uuid, erro: &str) {
    error!("[RELAY] [{}] Erro: {}", id, erro);
}
