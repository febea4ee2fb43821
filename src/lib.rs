//! Chess board with a mirrored coordinate system and per-piece move
//! generation.
//!
//! [`chess::board::Board`] owns the pieces and translates algebraic
//! coordinates (`"E2"`) to grid indices, [`chess::movegen`] produces the
//! destinations of the piece standing on a square.
//!
//! ```
//! use mirrorboard::chess::board::Board;
//! use mirrorboard::chess::core::Color;
//!
//! let mut board = Board::empty();
//! board.initialize_pieces(Color::Black);
//! assert_eq!(board.valid_moves("D2").unwrap(), vec!["D4", "D3"]);
//! ```

// TODO: Gradually move most of warnings to deny.
#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod chess;

mod engine;
mod error;

pub use engine::Engine;
pub use error::{Error, Result};
use shadow_rs::shadow;

shadow!(build);

/// Build profile. Produced by `build.rs`.
const PROFILE: &str = include_str!(concat!(env!("OUT_DIR"), "/profile"));

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version and the repository on startup.
pub fn print_engine_info() {
    println!("Mirrorboard {}", engine_version());
    println!("<https://github.com/kirillbobyrev/mirrorboard>");
}

/// Prints the build profile and whether the build is clean on startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    println!("Profile: {PROFILE}");
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
