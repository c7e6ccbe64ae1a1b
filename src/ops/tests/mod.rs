mod chain_tests;
mod flip_tests;
