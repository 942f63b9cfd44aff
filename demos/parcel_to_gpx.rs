use anyhow::Result;
use eiendomsgrenser::collect::kartverket::{AddressCollect, WfsCollect};
use eiendomsgrenser::export::{self, ExportFormat};
use eiendomsgrenser::geometric::map_preview::MapPreview;
use eiendomsgrenser::geometric::parcel::{BoundaryResolver, Identifier, MatrikkelId};

/// Fetch one parcel boundary from Kartverket and write it as a GPX file.
fn main() -> Result<()> {
    env_logger::init();

    let resolver = BoundaryResolver::new(WfsCollect::new(), AddressCollect::new());

    // Stavanger kommune, gnr 58, bnr 444
    let identifier = Identifier::Direct(MatrikkelId::new("1103", "58", "444"));
    let features = resolver.resolve(&identifier)?;
    println!("{} feature(s) hentet", features.features.len());

    let artifact = export::export(&features, ExportFormat::Gpx)?;
    let path = format!("./eiendom{}", artifact.extension);
    std::fs::write(&path, &artifact.bytes)?;
    println!("skrev {path}");

    let preview = MapPreview::build(&features);
    if let Some(viewport) = preview.viewport {
        println!(
            "kartsenter: {:.5}, {:.5} (zoom {})",
            viewport.center.0, viewport.center.1, viewport.zoom
        );
    }

    Ok(())
}
