pub mod test_log;
