//! Record type shared by batch ingestion jobs.

pub mod models;

pub use models::Person;
