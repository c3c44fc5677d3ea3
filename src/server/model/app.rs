use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub public_url: String,
}

impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, public_url): (DatabaseConnection, String)) -> Self {
        Self { db, public_url }
    }
}
