// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr, str::FromStr, time::Duration};

const PORTA_PADRAO: u16 = 3000;
const TIMEOUT_CONEXAO_PADRAO_SECS: u64 = 30;
const MAX_CONEXOES_PADRAO: u32 = 5;

/// Configuração do processo, lida das variáveis de ambiente (e do `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    /// URL da base de dados; o ficheiro indicado é a base de dados usada.
    pub database_url: String,
    pub connect_timeout: Duration,
    pub max_connections: u32,
    pub port: u16,
}

impl Config {
    /// O `.env` já deve ter sido carregado (ver `main`).
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let connect_timeout =
            Duration::from_secs(ler_opcional("DB_CONNECT_TIMEOUT_SECS", TIMEOUT_CONEXAO_PADRAO_SECS)?);
        let max_connections = ler_opcional("DB_MAX_CONNECTIONS", MAX_CONEXOES_PADRAO)?;
        let port = ler_opcional("PORT", PORTA_PADRAO)?;

        Ok(Self {
            database_url,
            connect_timeout,
            max_connections,
            port,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// Lê uma variável numérica; ausente -> valor padrão, mal formada -> erro
fn ler_opcional<T>(nome: &str, padrao: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(nome) {
        Ok(valor) => valor
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}='{}': {}", nome, valor, e))),
        Err(env::VarError::NotPresent) => Ok(padrao),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variavel_ausente_usa_padrao() {
        let valor: u16 = ler_opcional("ALUNOS_API_TESTE_NAO_DEFINIDA", 3000).unwrap();
        assert_eq!(valor, 3000);
    }

    #[test]
    fn variavel_invalida_gera_erro_de_config() {
        env::set_var("ALUNOS_API_TESTE_PORTA_INVALIDA", "abc");
        let resultado: AppResult<u16> = ler_opcional("ALUNOS_API_TESTE_PORTA_INVALIDA", 3000);
        assert!(matches!(resultado, Err(AppError::Config(_))));
    }

    #[test]
    fn bind_addr_escuta_em_todas_as_interfaces() {
        let config = Config {
            database_url: "sqlite::memory:".into(),
            connect_timeout: Duration::from_secs(30),
            max_connections: 1,
            port: 3000,
        };
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
    }
}
