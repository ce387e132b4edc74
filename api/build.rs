fn main() -> Result<(), Box<dyn std::error::Error>> {
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["../racing/proto/racing.proto"], &["../racing/proto"])?;

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["../sports/proto/sports.proto"], &["../sports/proto"])?;

    println!("cargo:rerun-if-changed=../racing/proto/racing.proto");
    println!("cargo:rerun-if-changed=../sports/proto/sports.proto");
    Ok(())
}
