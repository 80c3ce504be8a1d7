pub mod asserts;
pub mod random;
pub mod tamper;
