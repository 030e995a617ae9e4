pub mod budget;
pub mod checkin;
pub mod expense;
