use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contents::OwnerId).integer().not_null())
                    .col(ColumnDef::new(Contents::RawContent).text().not_null())
                    .col(ColumnDef::new(Contents::Summary).text())
                    .col(ColumnDef::new(Contents::Sentiment).string())
                    .col(
                        ColumnDef::new(Contents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Contents::Table, Contents::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Contents::Table)
                    .col(Contents::OwnerId)
                    .name("idx_contents_owner_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contents {
    Table,
    Id,
    OwnerId,
    RawContent,
    Summary,
    Sentiment,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
