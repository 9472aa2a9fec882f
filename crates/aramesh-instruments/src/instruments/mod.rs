pub mod pss5;
pub mod pss10;

/// Option labels shared by the PSS variants (answer indices 0–3).
pub(crate) const PSS_OPTIONS: [&str; 4] = ["Never", "Almost never", "Sometimes", "Almost always"];
