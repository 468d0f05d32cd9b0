//! sea-orm entities owned by the learning service.

pub mod dioceses;
pub mod groups;
pub mod managers;
pub mod question_progress;
pub mod regions;
pub mod unit_progress;
pub mod users;
