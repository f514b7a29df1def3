use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250101_000001_create_registry_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Namespace::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Namespace::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Namespace::Name).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Extension::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Extension::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Extension::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Extension::NamespaceId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extension_namespace")
                            .from(Extension::Table, Extension::NamespaceId)
                            .to(Namespace::Table, Namespace::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExtensionVersion::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExtensionVersion::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExtensionVersion::Version).string_len(255).not_null())
                    .col(ColumnDef::new(ExtensionVersion::ExtensionId).big_integer().not_null())
                    .col(ColumnDef::new(ExtensionVersion::DisplayName).string_len(255).null())
                    .col(ColumnDef::new(ExtensionVersion::Description).text().null())
                    .col(ColumnDef::new(ExtensionVersion::Timestamp).timestamp_with_time_zone().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_extension_version_extension")
                            .from(ExtensionVersion::Table, ExtensionVersion::ExtensionId)
                            .to(Extension::Table, Extension::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一扩展下版本字符串唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_extension_version_extension_id_version")
                    .table(ExtensionVersion::Table)
                    .col(ExtensionVersion::ExtensionId)
                    .col(ExtensionVersion::Version)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_extension_namespace_id")
                    .table(Extension::Table)
                    .col(Extension::NamespaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExtensionVersion::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Extension::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Namespace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Namespace {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Extension {
    Table,
    Id,
    Name,
    NamespaceId,
}

#[derive(DeriveIden)]
enum ExtensionVersion {
    Table,
    Id,
    Version,
    ExtensionId,
    DisplayName,
    Description,
    Timestamp,
}
