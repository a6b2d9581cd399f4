//! Build metadata generated by the build script

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Crate version as recorded in Cargo.toml
pub fn package_version() -> &'static str {
    PACKAGE_VERSION
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line version banner for `--version`
pub fn long_version() -> String {
    format!(
        "{} (git {}, built {})",
        package_version(),
        git_hash(),
        build_time()
    )
}
