/// Best-effort network address of the caller, inferred from proxy headers.
///
/// Informational only. Header values are not authenticated, so this must
/// never be used for security decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddressInfo {
    pub address: String,
    /// Name of the header the address was taken from.
    pub source: &'static str,
}

impl ClientAddressInfo {
    pub const UNKNOWN_ADDRESS: &'static str = "unknown";
    pub const NOT_DETECTED: &'static str = "Not detected";

    pub fn unknown() -> Self {
        Self {
            address: Self::UNKNOWN_ADDRESS.into(),
            source: Self::NOT_DETECTED,
        }
    }

    pub fn is_known(&self) -> bool {
        self.source != Self::NOT_DETECTED
    }
}

impl Default for ClientAddressInfo {
    fn default() -> Self {
        Self::unknown()
    }
}

impl std::fmt::Display for ClientAddressInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.address, self.source)
    }
}
