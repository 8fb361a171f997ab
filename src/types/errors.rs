//! Tipos de erro do Votum.

use thiserror::Error;

/// Tipo de resultado padrão do Votum.
pub type VotumResult<T> = Result<T, VotumError>;

/// Código de saída para erros (entrada inválida ou falha inesperada).
pub const EXIT_ERROR: i32 = 2;

/// Erros possíveis no Votum.
#[derive(Error, Debug)]
pub enum VotumError {
    /// Entrada rejeitada na validação, antes de qualquer contagem.
    #[error("Entrada inválida: {0}")]
    InvalidInput(String),

    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl VotumError {
    /// Cria um erro de entrada inválida.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Indica se o erro veio da validação da entrada.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Código de saída do processo para este erro.
    ///
    /// Todo erro é um erro "duro" (2); os códigos 0 e 1 ficam
    /// reservados para as decisões approve e reject.
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}
