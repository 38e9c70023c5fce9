/// Color tier for a coverage percentage.
///
/// The five tiers are fixed; the hex tokens are part of the wire contract
/// with the badge service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageColor {
    BrightGreen,
    YellowGreen,
    Olive,
    Orange,
    Red,
}

impl CoverageColor {
    /// Hex token used in the badge path segment.
    pub fn token(self) -> &'static str {
        match self {
            CoverageColor::BrightGreen => "49c31a",
            CoverageColor::YellowGreen => "97c40f",
            CoverageColor::Olive => "a0a127",
            CoverageColor::Orange => "cba317",
            CoverageColor::Red => "ce0000",
        }
    }
}

/// Map a coverage percentage to its color tier.
///
/// Total over any input: NaN and out-of-range values fall through to red.
pub fn color_for(pct: f64) -> CoverageColor {
    if pct == 100.0 {
        CoverageColor::BrightGreen
    } else if pct >= 90.0 {
        CoverageColor::YellowGreen
    } else if pct >= 80.0 {
        CoverageColor::Olive
    } else if pct >= 60.0 {
        CoverageColor::Orange
    } else {
        CoverageColor::Red
    }
}
