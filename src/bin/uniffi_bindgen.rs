//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! This binary generates Swift, Kotlin, Python, and Ruby bindings for the
//! extra recipes catalog library.
//!
//! ## Usage
//!
//! Generate Swift bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libextra_recipes_catalog.so --language swift --out-dir ./bindings
//! ```
//!
//! Generate Kotlin bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libextra_recipes_catalog.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
