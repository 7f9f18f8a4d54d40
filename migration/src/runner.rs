use colored::*;
use futures::FutureExt;
use sea_orm_migration::prelude::*;
use std::time::Instant;

pub async fn run_all_migrations(url: &str) {
    let db = sea_orm::Database::connect(url)
        .await
        .expect("DB connection failed");

    let schema_manager = SchemaManager::new(&db);
    println!("Running migrations...");

    for migration in <crate::Migrator as MigratorTrait>::migrations() {
        let start = Instant::now();
        let outcome = std::panic::AssertUnwindSafe(migration.up(&schema_manager))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(())) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("  {} {} {}", "applied".green(), migration.name().bold(), time_str);
            }
            Ok(Err(e)) => {
                println!("  {} {}: {}", "failed".red(), migration.name().bold(), e);
                std::process::exit(1);
            }
            Err(_) => {
                println!("  {} {} (panicked)", "failed".red(), migration.name().bold());
                std::process::exit(1);
            }
        }
    }
}
