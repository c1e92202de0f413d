use crate::error::Result;
use crate::report;
use galvasim::core::potentials;
use tracing::info;

pub fn run() -> Result<()> {
    let materials = potentials::materials();
    info!("Listing {} electrode materials.", materials.len());
    println!("{}", report::render_materials(&materials));
    Ok(())
}
