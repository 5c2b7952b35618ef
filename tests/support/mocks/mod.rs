pub mod observers;
pub mod records;
pub mod slugifier;
pub mod stores;
