//! CLI definition using clap

use clap::{Parser, Subcommand};
use mass_import::config::{config_keys, Environment};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mass-import")]
#[command(version)]
#[command(about = "Importação em massa de cadastros a partir de arquivos JSON/CSV")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Arquivo de configuração TOML
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logs em JSON (stderr)
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lista os tipos de dados disponíveis
    Types,

    /// Imprime o cabeçalho CSV de um tipo
    Template {
        /// Tipo de dado (ex.: veiculos)
        data_type: String,
    },

    /// Valida um arquivo sem enviar nada
    Validate {
        data_type: String,
        file: PathBuf,
    },

    /// Valida e importa um arquivo, registro a registro
    Import {
        data_type: String,
        file: PathBuf,

        /// Token de acesso
        #[arg(long, env = config_keys::TOKEN, hide_env_values = true)]
        token: Option<String>,

        /// Organização
        #[arg(long, env = config_keys::ORGANIZATION)]
        org: Option<String>,

        /// Empresa
        #[arg(long, env = config_keys::COMPANY)]
        company: Option<String>,

        /// Ambiente (test, staging, sandbox, prod); sobrepõe a configuração
        #[arg(long)]
        env: Option<Environment>,
    },
}
