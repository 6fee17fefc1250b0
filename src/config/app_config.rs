#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub package_root: String,
    pub templates: Vec<String>,
    pub strict: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "postgres".to_string()),
            package_root: std::env::var("PGGEN_PACKAGE_ROOT")
                .unwrap_or_else(|_| "pggen".to_string()),
            templates: parse_templates(
                &std::env::var("PGGEN_TEMPLATES").unwrap_or_else(|_| "table,tests".to_string()),
            ),
            strict: std::env::var("PGGEN_STRICT")
                .map(|raw| matches!(raw.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn catalog_database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn parse_templates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
