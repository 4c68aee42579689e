//! About-panel information, sourced from build metadata.

/// Static information shown in the application's About panel.
#[derive(Debug, Clone)]
pub struct AboutInfo {
    /// Application display name
    pub name: &'static str,

    /// Version string from build metadata, `"1.0"` when absent
    pub version: &'static str,

    /// Multi-line credits block listing supported formats
    pub credits: String,
}

impl AboutInfo {
    pub fn new() -> Self {
        let version = option_env!("CARGO_PKG_VERSION").unwrap_or("1.0");
        Self {
            name: "NovaExtract",
            version,
            credits: credits(version),
        }
    }
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self::new()
    }
}

fn credits(version: &str) -> String {
    format!(
        "NovaExtract\n\
         \n\
         Version {version}\n\
         \n\
         A powerful and intuitive file extraction and compression tool.\n\
         \n\
         Supported formats for extraction:\n\
         • ZIP, TAR, TAR.GZ, TAR.BZ2, GZ, BZ2\n\
         \n\
         Supported formats for compression:\n\
         • ZIP, TAR, TAR.GZ, TAR.BZ2\n\
         \n\
         Developed by Artur Martins - Tirano Tech\n\
         \n\
         Copyright © 2025 Artur Martins - Tirano Tech. All rights reserved."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_reflects_build_metadata() {
        let about = AboutInfo::new();
        assert!(!about.version.is_empty());
        assert!(about.credits.contains(&format!("Version {}", about.version)));
    }

    #[test]
    fn credits_enumerate_supported_formats() {
        let about = AboutInfo::new();
        assert!(about
            .credits
            .contains("Supported formats for extraction:\n• ZIP, TAR, TAR.GZ, TAR.BZ2, GZ, BZ2"));
        assert!(about
            .credits
            .contains("Supported formats for compression:\n• ZIP, TAR, TAR.GZ, TAR.BZ2"));
    }
}
