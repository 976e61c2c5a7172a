pub mod airports;
pub mod facilities;
pub mod facility_types;

pub use airports::Entity as Airports;
pub use airports::Model as Airport;
pub use facilities::Entity as Facilities;
pub use facilities::Model as Facility;
pub use facility_types::Entity as FacilityTypes;
pub use facility_types::Model as FacilityType;
