pub mod diocese;
pub mod group;
pub mod manager;
pub mod progress;
pub mod region;
pub mod user;
