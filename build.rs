/// Expose the compilation target triple as an environment variable at build time.
///
/// `cli::LONG_VERSION` reads it via `env!("TARGET")` for the long
/// `--version` output.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
