//! Edge case tests for spanscan-lex
