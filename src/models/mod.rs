pub mod fruit;
pub mod raspberry;
pub mod season;
