//! # Number Service Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks
//! └── src/integration/  # end-to-end flows through the HTTP router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ns-tests
//! cargo bench -p ns-tests
//! ```

#![allow(dead_code)]
