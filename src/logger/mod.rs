pub mod file_change_logger;
