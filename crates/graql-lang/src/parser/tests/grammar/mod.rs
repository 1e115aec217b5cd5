mod compute_tests;
mod patterns_tests;
mod queries_tests;
mod statements_tests;
