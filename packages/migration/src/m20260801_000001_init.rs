use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Airports {
    Table,
    Id,
    Name,
    IataCode,
    City,
    Country,
    Description,
}

#[derive(Iden)]
enum FacilityTypes {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Facilities {
    Table,
    Id,
    Name,
    Location,
    Description,
    OperatingHours,
    FacilityTypeId,
    AirportId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // airports
        manager
            .create_table(
                Table::create()
                    .table(Airports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Airports::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Airports::Name).string().not_null())
                    .col(
                        ColumnDef::new(Airports::IataCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Airports::City).string().not_null())
                    .col(ColumnDef::new(Airports::Country).string().not_null())
                    .col(ColumnDef::new(Airports::Description).string().null())
                    .to_owned(),
            )
            .await?;

        // facility_types
        manager
            .create_table(
                Table::create()
                    .table(FacilityTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FacilityTypes::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(FacilityTypes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // facilities
        manager
            .create_table(
                Table::create()
                    .table(Facilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Facilities::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Facilities::Name).string().not_null())
                    .col(ColumnDef::new(Facilities::Location).string().not_null())
                    .col(ColumnDef::new(Facilities::Description).string().null())
                    .col(ColumnDef::new(Facilities::OperatingHours).string().null())
                    .col(
                        ColumnDef::new(Facilities::FacilityTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Facilities::AirportId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_facilities_facility_type_id")
                            .from(Facilities::Table, Facilities::FacilityTypeId)
                            .to(FacilityTypes::Table, FacilityTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_facilities_airport_id")
                            .from(Facilities::Table, Facilities::AirportId)
                            .to(Airports::Table, Airports::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // lookup path: airport + category
        manager
            .create_index(
                Index::create()
                    .name("ix_facilities_airport_id_facility_type_id")
                    .table(Facilities::Table)
                    .col(Facilities::AirportId)
                    .col(Facilities::FacilityTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_facilities_airport_id_facility_type_id")
                    .table(Facilities::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Facilities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FacilityTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Airports::Table).to_owned())
            .await?;

        Ok(())
    }
}
