use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/calculator/v1/calculator.proto");
    println!("cargo:rerun-if-changed=proto");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    // Use the system protoc when PROTOC is set, the vendored binary otherwise.
    let mut config = prost_build::Config::new();
    if env::var_os("PROTOC").is_none() {
        config.protoc_executable(protoc_bin_vendored::protoc_bin_path()?);
    }

    tonic_prost_build::configure()
        .build_client(true)
        .build_server(true)
        .file_descriptor_set_path(out_dir.join("calculator_descriptor.bin"))
        .compile_with_config(
            config,
            &["proto/calculator/v1/calculator.proto"],
            &["proto"],
        )?;

    Ok(())
}
