use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Position).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::StatusComment).string())
                    .col(
                        ColumnDef::new(Users::Balance)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Users::Avatar).string().not_null())
                    .col(ColumnDef::new(Users::Telegram).string())
                    .col(
                        ColumnDef::new(Users::IsRemote)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::Disabled)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StatusLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StatusLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StatusLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(StatusLogs::AdminId).uuid().not_null())
                    .col(ColumnDef::new(StatusLogs::Status).string().not_null())
                    .col(
                        ColumnDef::new(StatusLogs::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_status_logs_user_recorded")
                    .table(StatusLogs::Table)
                    .col(StatusLogs::UserId)
                    .col(StatusLogs::RecordedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BalanceLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BalanceLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BalanceLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(BalanceLogs::AdminId).uuid().not_null())
                    .col(ColumnDef::new(BalanceLogs::Action).string().not_null())
                    .col(ColumnDef::new(BalanceLogs::Points).big_integer().not_null())
                    .col(ColumnDef::new(BalanceLogs::Comment).string())
                    .col(
                        ColumnDef::new(BalanceLogs::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_balance_logs_user_recorded")
                    .table(BalanceLogs::Table)
                    .col(BalanceLogs::UserId)
                    .col(BalanceLogs::RecordedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Products::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Products::Name).string().not_null())
                    .col(ColumnDef::new(Products::Description).string().not_null())
                    .col(ColumnDef::new(Products::Price).big_integer().not_null())
                    .col(ColumnDef::new(Products::Image).string().not_null())
                    .col(ColumnDef::new(Products::Stock).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PurchaseRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PurchaseRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PurchaseRequests::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(PurchaseRequests::ProductId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PurchaseRequests::Quantity)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PurchaseRequests::State).string().not_null())
                    .col(
                        ColumnDef::new(PurchaseRequests::RequestedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PurchaseRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BalanceLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StatusLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Role,
    Position,
    Status,
    StatusComment,
    Balance,
    Avatar,
    Telegram,
    IsRemote,
    Disabled,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StatusLogs {
    Table,
    Id,
    UserId,
    AdminId,
    Status,
    RecordedAt,
}

#[derive(DeriveIden)]
enum BalanceLogs {
    Table,
    Id,
    UserId,
    AdminId,
    Action,
    Points,
    Comment,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Image,
    Stock,
}

#[derive(DeriveIden)]
enum PurchaseRequests {
    Table,
    Id,
    UserId,
    ProductId,
    Quantity,
    State,
    RequestedAt,
}
