//! Airline codes that every search fans out over.

/// IATA carrier codes offered on every search, in response order.
pub const AIRLINE_CODES: &[&str] = &[
    "2A", "3L", "3U", "6E", "8D", "8M", "A3", "AA", "AC", "AF",
    "AI", "AS", "AT", "AV", "AY", "AZ", "B6", "BA", "BG", "BI",
    "BR", "BS", "CA", "CI", "CX", "CY", "CZ", "DE", "DL", "EI",
    "EK", "ES", "ET", "EY", "FI", "FM", "FZ", "G9", "GA", "GF",
    "H1", "H9", "HX", "IB", "J2", "J9", "JL", "KE", "KL", "KQ",
    "KU", "LH", "LJ", "LM", "LO", "LX", "LY", "ME", "MH", "MS",
    "MU", "NH", "OD", "OS", "OV", "OZ", "PG", "PR", "QF", "QR",
    "RJ", "RO", "RQ", "SA", "SK", "SL", "SN", "SQ", "SV", "TG",
    "TK", "TP", "TR", "UA", "UG", "UI", "UL", "UM", "UN", "UO",
    "UP", "UT", "UU", "UX", "UZ", "VF", "VJ", "VN", "VQ", "VS",
    "VT", "VU", "VY", "W3", "W5", "WA", "WB", "WF", "WI", "WK",
    "WM", "WN", "WO", "WS", "WT", "WU", "WY", "X3", "X5", "XE",
    "XF", "XJ", "XK", "XL", "XM", "XY", "XZ", "Y4", "Y5", "YD",
    "YI", "YW", "Z2", "ZG", "ZH", "ZL", "ZN", "ZV", "ZX", "ZY",
];

/// Display name for a carrier code.
pub fn carrier_name(code: &str) -> String {
    format!("Airline {}", code)
}
