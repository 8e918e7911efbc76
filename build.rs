fn main() {
    // Footer copyright year is taken from the build timestamp
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // rust-embed bakes content/ into the binary, so edits there need a rebuild
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
