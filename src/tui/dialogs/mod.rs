//! Modal dialogs

pub mod budget;
pub mod confirm;
pub mod transaction;
