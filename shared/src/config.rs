use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_parse_or("DATABASE_PORT", 5432)?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let redis = RedisConfig {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_parse_or("REDIS_PORT", 6379)?,
        };
        let auth = AuthConfig {
            ttl: env_parse_or("AUTH_TOKEN_TTL", 86400)?,
        };
        Ok(Self {
            database,
            redis,
            auth,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(v) => Ok(v.parse::<T>()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_falls_back_to_defaults() -> Result<()> {
        let cfg = AppConfig::new()?;
        assert_eq!(cfg.database.port, 5432);
        assert_eq!(cfg.redis.port, 6379);
        assert_eq!(cfg.auth.ttl, 86400);
        Ok(())
    }
}
