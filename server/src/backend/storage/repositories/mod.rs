// Repository modules
pub mod checkin_repository;
pub mod expense_repository;
pub mod settings_repository;

// Re-export repository types
pub use checkin_repository::CheckinRepository;
pub use expense_repository::ExpenseRepository;
pub use settings_repository::SettingsRepository;
