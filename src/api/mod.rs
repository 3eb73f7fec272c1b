pub mod command;
pub mod processor;
pub mod roster_dto;
pub mod schedule_dto;
