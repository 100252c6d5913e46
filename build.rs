fn main() {
    // RFC 3339 stamp shown in the footer; read with env!("BUILD_TIME")
    println!("cargo:rustc-env=BUILD_TIME={}", chrono::Utc::now().to_rfc3339());

    // content/ is embedded into the binary
    println!("cargo:rerun-if-changed=content");
    println!("cargo:rerun-if-changed=build.rs");
}
