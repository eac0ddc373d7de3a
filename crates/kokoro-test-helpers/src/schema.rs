use sea_orm::{ConnectionTrait, DbConn, DbErr};

/// Applies the full schema to an empty test database.
pub async fn setup_schema(db: &DbConn) -> Result<(), DbErr> {
    let migration = match db.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => include_str!("schema/postgres.sql"),
        sea_orm::DatabaseBackend::Sqlite => include_str!("schema/sqlite.sql"),
        #[allow(clippy::unimplemented)]
        sea_orm::DatabaseBackend::MySql => unimplemented!(),
    };

    db.execute_unprepared(migration).await?;
    Ok(())
}
