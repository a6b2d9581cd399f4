//! Test modules for the string queue
//!
//! Tests are organized by functional area for better maintainability.
