use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_table_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPost::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPost::Title).string().unique_key().not_null())
                    .col(ColumnDef::new(BlogPost::Subtitle).string().not_null())
                    .col(ColumnDef::new(BlogPost::Date).string().not_null())
                    .col(ColumnDef::new(BlogPost::Body).text().not_null())
                    .col(ColumnDef::new(BlogPost::ImgUrl).string().not_null())
                    .col(ColumnDef::new(BlogPost::AuthorId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_posts-author_id")
                            .from(BlogPost::Table, BlogPost::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    #[sea_orm(iden = "blog_posts")]
    Table,
    Id,
    Title,
    Subtitle,
    Date,
    Body,
    ImgUrl,
    AuthorId,
}
