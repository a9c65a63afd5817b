use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

/// PostgreSQL数据库配置
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 数据库主机，环境变量 `DB_HOST`
    pub host: String,

    /// 数据库端口，环境变量 `DB_PORT`
    pub port: u16,

    /// 数据库用户，环境变量 `DB_USER`
    pub user: String,

    /// 数据库密码，环境变量 `DB_PASSWORD`
    pub password: String,

    /// 数据库名称，环境变量 `DB_NAME`
    pub name: String,

    /// 连接池最大连接数，环境变量 `DB_MAX_CONNECTIONS`
    pub max_connections: u32,
}

// 密码不能出现在日志里
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"******")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// 程序配置
///
/// 启动时加载一次，之后以 [`Arc`] 的形式只读共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// postgresql数据库配置
    pub database: DatabaseConfig,

    /// Web服务监听地址，环境变量 `BIND_ADDR`
    pub bind_addr: String,

    /// 是否挂载管理接口（创建/修改/删除），环境变量 `ADMIN_ROUTES_ENABLED`
    ///
    /// 服务本身没有鉴权，因此默认关闭
    pub admin_routes_enabled: bool,
}

impl AppConfig {
    /// 从进程环境变量加载配置
    pub fn load() -> Result<Arc<AppConfig>, ConfigError> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if let Err(e) = dotenvy::dotenv() {
            warn!("⚠️ 未找到 .env 文件，直接使用环境变量: {e}");
        }

        Self::from_lookup(|key| std::env::var(key).ok()).map(Arc::new)
    }

    /// 通过任意的键值查询函数构建配置
    ///
    /// 所有配置项都是可选的，缺失时使用默认值；只有无法解析的值才会返回 [`ConfigError`]。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database = DatabaseConfig {
            host: get("DB_HOST", "localhost"),
            port: parse_var(&lookup, "DB_PORT", 5432)?,
            user: get("DB_USER", "postgres"),
            password: get("DB_PASSWORD", "password"),
            name: get("DB_NAME", "postgres"),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", 10)?,
        };

        let admin_routes_enabled = match lookup("ADMIN_ROUTES_ENABLED") {
            None => false,
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::invalid_value("ADMIN_ROUTES_ENABLED", value, "expected true/false"))?,
        };

        Ok(AppConfig {
            database,
            bind_addr: get("BIND_ADDR", "0.0.0.0:8080"),
            admin_routes_enabled,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid_value(key, value, e)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
