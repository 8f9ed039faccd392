pub mod location_repository;

pub use location_repository::SeaOrmLocationRepository;
