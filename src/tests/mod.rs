//! Cross-module tests driven through the mock transport.

mod screen_tests;
