pub struct Config {
    pub database_url: String,
    pub listen_address: String,
    /// Base URL used when constructing invitation accept links.
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            public_url: std::env::var("PUBLIC_URL")?,
        })
    }
}
