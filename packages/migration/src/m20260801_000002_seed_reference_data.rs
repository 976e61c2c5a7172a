use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

// One-time load of the reference data. The query service never writes;
// these rows are the entire dataset.

const AIRPORTS: &str = "\
INSERT INTO airports (id, name, iata_code, city, country, description) VALUES
    (1, 'Indira Gandhi International Airport', 'DEL', 'Delhi', 'India', 'Major international airport in New Delhi'),
    (2, 'Chhatrapati Shivaji Maharaj International Airport', 'BOM', 'Mumbai', 'India', 'Primary international airport in Mumbai'),
    (3, 'Kempegowda International Airport', 'BLR', 'Bengaluru', 'India', 'Major airport serving Bangalore')";

const FACILITY_TYPES: &str = "\
INSERT INTO facility_types (id, name) VALUES
    (1, 'restaurant'),
    (2, 'shop'),
    (3, 'lounge'),
    (4, 'bathroom')";

const FACILITIES: &str = "\
INSERT INTO facilities (id, name, location, description, operating_hours, facility_type_id, airport_id) VALUES
    (1, 'Dilli Streat', 'Terminal 3, Level 3', 'Indian street food', '24/7', 1, 1),
    (2, 'Delhi Duty Free', 'Terminal 3 International', 'Duty-free shopping', '24/7', 2, 1),
    (3, 'Plaza Premium Lounge', 'Terminal 3 International', 'Premium lounge services', '24/7', 3, 1),
    (4, 'Cafe Mumbai', 'Terminal 2, Level 4', 'Local and international cuisine', '24/7', 1, 2),
    (5, 'Mumbai Shopping', 'Terminal 2 International', 'Duty-free and local goods', '24/7', 2, 2),
    (6, 'GVK Lounge', 'Terminal 2, Level 3', 'Premium lounge', '24/7', 3, 2),
    (7, 'Bangalore Kitchen', 'Terminal 1, Level 2', 'South Indian specialties', '24/7', 1, 3),
    (8, 'Karnataka Retail', 'Terminal 1', 'Local handicrafts and duty-free', '6:00-23:00', 2, 3),
    (9, 'BLR Lounge', 'Terminal 1, Level 3', 'Business lounge', '24/7', 3, 3)";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(AIRPORTS).await?;
        db.execute_unprepared(FACILITY_TYPES).await?;
        db.execute_unprepared(FACILITIES).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // children before parents, FK order
        db.execute_unprepared("DELETE FROM facilities").await?;
        db.execute_unprepared("DELETE FROM facility_types").await?;
        db.execute_unprepared("DELETE FROM airports").await?;

        Ok(())
    }
}
