/// Kartverket WFS endpoint serving matrikkel (property) boundaries.
pub const WFS_URL: &str = "https://wfs.geonorge.no/skwms1/wfs.eiendom";

/// WFS feature type holding property boundaries.
pub const WFS_TYPENAME: &str = "matrikkel:Eiendom";

/// Geonorge free-text address search endpoint.
pub const ADDRESS_URL: &str = "https://ws.geonorge.no/adresser/v1/sok";

/// Page size for address search. Hits come back in upstream ranking order
/// and only the first one is ever used.
pub const ADDRESS_HITS_PER_PAGE: u32 = 10;
