use std::error::Error;

// Emits VERGEN_* variables read by `ballistics info`.
fn main() -> Result<(), Box<dyn Error>> {
    let build = vergen_gitcl::BuildBuilder::default()
        .build_timestamp(true)
        .build()?;
    let cargo = vergen_gitcl::CargoBuilder::default()
        .target_triple(true)
        .build()?;
    let git = vergen_gitcl::GitclBuilder::default()
        .sha(true)
        .dirty(true)
        .build()?;
    let rustc = vergen_gitcl::RustcBuilder::default().semver(true).build()?;

    vergen_gitcl::Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&git)?
        .add_instructions(&rustc)?
        .emit()?;
    Ok(())
}
