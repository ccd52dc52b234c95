//! Unit tests for the task module.

mod repository_tests;
