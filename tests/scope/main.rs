//! Integration tests for Layer 2: Scope
//!
//! Tests for namespaces, accessors, configuration, and the entry point.

mod configuration;
