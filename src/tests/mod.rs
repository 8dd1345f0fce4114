pub mod test_utils;

mod concurrent_tests;
