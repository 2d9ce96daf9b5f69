//! Colors and fonts for the scene (CSS syntax, handed straight to the canvas)

/// Colors for game elements
pub mod colors {
    pub const TOP_STRIP: &str = "#243628";
    pub const ROAD: &str = "#2b2a33";
    pub const SIDEWALK: &str = "#1f3d4c";
    pub const LANE_MARK: &str = "#d8d9dd";

    pub const STASH: &str = "#ffd166";
    pub const STASH_LABEL: &str = "#402f00";
    pub const DROP_PAD: &str = "#6fe3c6";
    pub const DROP_LABEL: &str = "#083327";

    pub const VEHICLE_SHADOW: &str = "rgba(0,0,0,0.3)";
    pub const WINDSHIELD: &str = "#c4d2f6";

    pub const PLAYER: &str = "#f4c05e";
    pub const PLAYER_ROOF: &str = "#201b17";
    pub const CARGO: &str = "#9b5de5";

    pub const CASH: &str = "#71f79f";
    pub const CASH_LABEL: &str = "#0d4020";

    pub const MESSAGE_BAR: &str = "rgba(0,0,0,0.5)";
    pub const MESSAGE_TEXT: &str = "#f3f8ff";

    pub const OVERLAY: &str = "rgba(3,5,10,0.7)";
    pub const OVERLAY_TITLE: &str = "#ffd166";
    pub const OVERLAY_TEXT: &str = "#f0f3ff";
}

pub mod fonts {
    pub const LABEL: &str = "16px Trebuchet MS";
    pub const MESSAGE: &str = "16px Trebuchet MS";
    pub const TITLE: &str = "bold 40px Trebuchet MS";
    pub const SUBTITLE: &str = "22px Trebuchet MS";
}

/// `0xRRGGBB` → `#rrggbb`
pub fn css_hex(rgb: u32) -> String {
    format!("#{:06x}", rgb & 0x00ff_ffff)
}

/// Delivery ring color at the given opacity
pub fn drop_ring(alpha: f32) -> String {
    format!("rgba(111, 227, 198, {})", alpha.clamp(0.0, 1.0))
}
