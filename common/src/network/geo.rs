/// Coarse location of an address, as reported by the geolocation service.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeoInfo {
    pub isp: String,
    pub country: String,
}
