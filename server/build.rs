fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/planner.proto");
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile(&["proto/planner.proto"], &["proto"])?;
    Ok(())
}
