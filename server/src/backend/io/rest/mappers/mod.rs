//! Conversions between the `shared` DTOs and domain types.

pub mod budget_mapper;
pub mod checkin_mapper;
pub mod expense_mapper;
