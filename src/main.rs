use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

// 导入库模块
use enumprop::config::Config;
use enumprop::core::error::ToPublicError;
use enumprop::utils::logging;
use enumprop::{EnumPropError, EnumPropResult, PropertyMap};

#[derive(Parser)]
#[clap(version = "0.1.0", author = "EnumProp Contributors")]
enum Cli {
    /// Resolve a token against a configured symbol table
    Resolve {
        #[clap(short, long, default_value = "config.toml")]
        config: PathBuf,
        /// Name of the symbol table declared in the config
        #[clap(short, long)]
        symbols: String,
        query: String,
    },
    /// Check a property file's bound fields against their symbol tables
    Check {
        #[clap(short, long, default_value = "config.toml")]
        config: PathBuf,
        properties: PathBuf,
    },
}

/// 读取配置并按其中的日志配置初始化日志，配置文件不存在时使用默认配置
fn load_config(path: &Path) -> EnumPropResult<Config> {
    if !path.exists() {
        let config = Config::default();
        init_logging(&config);
        log::info!("配置文件 {} 不存在，使用默认配置", path.display());
        return Ok(config);
    }

    let config = Config::load(path)?;
    init_logging(&config);
    log::info!("已加载配置: {}", path.display());
    Ok(config)
}

/// 以对外错误码的形式输出错误
fn report(err: &impl ToPublicError) {
    eprintln!("{}", err.to_public_error());
}

fn resolve(config: &Config, symbols: &str, query: &str) -> EnumPropResult<bool> {
    let table = config.symbol_table(symbols)?;
    match table.resolve(query) {
        Ok(constant) => {
            println!("{} (ordinal {})", constant.name, constant.ordinal);
            Ok(true)
        }
        Err(e) => {
            report(&EnumPropError::from(e));
            Ok(false)
        }
    }
}

fn check(config: &Config, properties: &Path) -> EnumPropResult<bool> {
    let props = PropertyMap::load(properties)?;
    let tables = config.symbol_tables()?;
    let mut ok = true;

    for (field, table_name) in &config.fields {
        let Some(table) = tables.iter().find(|t| t.type_name() == table_name) else {
            continue;
        };
        match props.get_symbol_in(table, field) {
            Ok(Some(constant)) => println!("{}: {} -> {}", field, table_name, constant),
            Ok(None) => println!("{}: 未设置", field),
            Err(e) => {
                log::debug!("字段 {} 校验失败: {:?}", field, e);
                report(&e);
                ok = false;
            }
        }
    }

    Ok(ok)
}

fn run(cli: Cli) -> EnumPropResult<bool> {
    match cli {
        Cli::Resolve {
            config,
            symbols,
            query,
        } => {
            let config = load_config(&config)?;
            resolve(&config, &symbols, &query)
        }
        Cli::Check { config, properties } => {
            let config = load_config(&config)?;
            check(&config, &properties)
        }
    }
}

fn init_logging(config: &Config) {
    if let Err(e) = logging::init(&config.log) {
        eprintln!("日志初始化失败: {}", e);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);
    logging::shutdown();

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}
