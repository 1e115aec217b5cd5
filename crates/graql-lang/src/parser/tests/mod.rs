mod errors_tests;
mod grammar;
