pub mod day_record;
pub mod employee;
pub mod punch;
pub mod timesheet;
