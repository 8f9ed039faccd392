use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create locations table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            visited INTEGER NOT NULL DEFAULT 0,
            latitude REAL NOT NULL DEFAULT 0.0,
            longitude REAL NOT NULL DEFAULT 0.0,
            photos TEXT,
            address TEXT,
            phone TEXT,
            website TEXT,
            opening_hours TEXT,
            external_map_url TEXT,
            coolness_rating TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Databases created before the rating and external map link existed
    // lack these columns. SQLite has no IF NOT EXISTS for ALTER TABLE,
    // so we ignore errors.
    let _ = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "ALTER TABLE locations ADD COLUMN coolness_rating TEXT".to_owned(),
        ))
        .await;

    let _ = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "ALTER TABLE locations ADD COLUMN external_map_url TEXT".to_owned(),
        ))
        .await;

    // Indexes for the two filterable columns
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_locations_category ON locations(category)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_locations_visited ON locations(visited)".to_owned(),
    ))
    .await?;

    Ok(())
}
