/// Hyperlink targets for the badge: one URL for the whole badge, or one per
/// half (left label, right message).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeLink {
    One(String),
    Many(Vec<String>),
}

/// Styling options forwarded to the badge service.
///
/// All fields are optional; absent fields are omitted from the URL, never
/// defaulted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadgeOptions {
    pub label_color: Option<String>,
    pub logo: Option<String>,
    pub logo_color: Option<String>,
    pub logo_width: Option<u32>,
    pub style: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub cache_seconds: Option<u32>,
    pub link: Option<BadgeLink>,
}
