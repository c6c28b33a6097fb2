fn main() {
    // Stamp the binary with its build time; the footer renders the date part.
    let stamp = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
