//! Build script for proto compilation.
//!
//! The generated code is committed to the repository under `src/generated/`,
//! so this only needs to run when a proto file changes.
//!
//! To regenerate: `cargo build --features regenerate-proto`

const PROTOS: &[&str] = &[
    "alerts",
    "apikeys",
    "dashboards",
    "enrichments",
    "events2metrics",
    "ip_access",
    "recording_rules",
    "retentions",
    "rule_groups",
    "scopes",
    "slos",
    "teams",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only regenerate if the feature is enabled
    #[cfg(feature = "regenerate-proto")]
    {
        let out_dir = std::path::PathBuf::from("src/generated");
        let files: Vec<String> = PROTOS
            .iter()
            .map(|name| format!("proto/{}.proto", name))
            .collect();

        // The provider only ever calls the platform, so no server stubs.
        tonic_prost_build::configure()
            .build_server(false)
            .out_dir(&out_dir)
            .compile_protos(&files, &["proto"])?;

        // prost names outputs after the package; rename to the module name.
        for name in PROTOS {
            let package = format!("com.observability.{}.v1.rs", name);
            let generated = out_dir.join(&package);
            if generated.exists() {
                std::fs::rename(generated, out_dir.join(format!("{}.rs", name)))?;
            }
        }
    }

    for name in PROTOS {
        println!("cargo:rerun-if-changed=proto/{}.proto", name);
    }

    Ok(())
}
