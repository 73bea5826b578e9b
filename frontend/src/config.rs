/// Formspree collector the contact form is relayed to.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mgvpwdge";

/// Shown in the failure toast when the relay doesn't go through.
pub const FALLBACK_EMAIL: &str = "info@viridata.eu";

/// Address listed in the contact section.
pub const CONTACT_EMAIL: &str = "info@greentrace.tech";

/// Added to the scroll offset so the fixed header doesn't hide the section being read.
pub const LOOKAHEAD_MARGIN_PX: f64 = 200.0;

pub const ROTATION_INTERVAL_MS: u32 = 5000;

pub const TOAST_LIFETIME_MS: u32 = 5000;

#[cfg(feature = "subpath")]
pub fn get_route_basename() -> Option<&'static str> {
    Some("/viridata-web")  // GitHub Pages project site
}

#[cfg(not(feature = "subpath"))]
pub fn get_route_basename() -> Option<&'static str> {
    None
}
