mod error_test;
mod token_test;
