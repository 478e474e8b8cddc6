pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm;

mod m20240101_000001_create_table_users;
mod m20240101_000002_create_table_posts;
mod m20240101_000003_create_table_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_table_users::Migration),
            Box::new(m20240101_000002_create_table_posts::Migration),
            Box::new(m20240101_000003_create_table_comments::Migration),
        ]
    }
}
