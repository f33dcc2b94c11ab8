fn main() {
    // Base URLs are baked in with option_env!, so a change must rebuild.
    for var in ["API_BASE_URL", "UI_API_BASE_URL", "S3_REPO_URL", "SITE_URL"] {
        println!("cargo:rerun-if-env-changed={var}");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
