use anyhow::Result;
use eiendomsgrenser::collect::kartverket::{AddressCollect, WfsCollect};
use eiendomsgrenser::export::{self, ExportFormat};
use eiendomsgrenser::geometric::batch;
use eiendomsgrenser::geometric::parcel::BoundaryResolver;

/// Resolve a CSV batch of matrikkel units and write one KML file holding
/// every boundary. Pass a CSV path as the first argument, or run without
/// arguments to use a small built-in sample.
fn main() -> Result<()> {
    env_logger::init();

    let rows = match std::env::args().nth(1) {
        Some(path) => batch::read_rows(std::fs::File::open(path)?)?,
        None => batch::read_rows("kommune,gnr,bnr\n1103,58,444\n1103,58,445\n".as_bytes())?,
    };
    println!("{} rader i batchen", rows.len());

    let resolver = BoundaryResolver::new(WfsCollect::new(), AddressCollect::new());
    let features = resolver.resolve_batch(rows)?;
    println!("{} feature(s) hentet", features.features.len());

    let artifact = export::export(&features, ExportFormat::Kml)?;
    let path = format!("./eiendommer{}", artifact.extension);
    std::fs::write(&path, &artifact.bytes)?;
    println!("skrev {path}");

    Ok(())
}
