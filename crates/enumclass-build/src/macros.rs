/// Build-script entry point.
///
/// Reads `enumclass.toml` (or the given path) relative to the crate manifest,
/// generates every marked declaration into `OUT_DIR` and reports problems to
/// cargo. Evaluates to `Result<BuildReport, BuildError>`.
///
/// ```ignore
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     enumclass::build!()?;
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! build {
    () => {
        $crate::build!($crate::config::CONFIG_FILE)
    };
    ($config:expr) => {{
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");

        $crate::run_build_script(::std::path::Path::new($config))
    }};
}
