use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{account::AccountFactory, catalog::CatalogFactory},
};

/// Public URL handed to test app states in place of the `PUBLIC_URL` env var.
pub static TEST_PUBLIC_URL: &str = "http://localhost:8080";

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup { db })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert the test database into any state type constructible from a
    /// database connection and public URL.
    ///
    /// This allows conversion to the main crate's `AppState` without creating
    /// a circular dependency.
    ///
    /// # Example
    /// ```ignore
    /// let app_state: AppState = test.into_app_state();
    /// ```
    pub fn into_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), TEST_PUBLIC_URL.to_string()))
    }

    /// Fixture helpers for user, agent, player, and invitation rows
    pub fn accounts(&self) -> AccountFactory<'_> {
        AccountFactory::new(&self.db)
    }

    /// Fixture helpers for club catalog rows
    pub fn catalog(&self) -> CatalogFactory<'_> {
        CatalogFactory::new(&self.db)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_core_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Agent),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::AgentInvitation),
                schema.create_table_from_entity(entity::prelude::ClubCatalog)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
