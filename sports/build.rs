use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = env::var("OUT_DIR")?;
    let descriptor_path = Path::new(&out_dir).join("sports_descriptor.bin");

    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .file_descriptor_set_path(&descriptor_path)
        .compile_protos(&["proto/sports.proto"], &["proto"])?;
    println!("cargo:rerun-if-changed=proto/sports.proto");
    Ok(())
}
