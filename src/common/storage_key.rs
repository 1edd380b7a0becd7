use std::fmt;

/// The two stored representations of one logical video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Original,
    Compressed,
}

impl Variant {
    pub fn prefix(self) -> &'static str {
        match self {
            Variant::Original => "original",
            Variant::Compressed => "compressed",
        }
    }

    /// Bucket key for an already-derived filename such as `clip.mov`.
    pub fn key_for(self, filename: &str) -> String {
        format!("{}/{}", self.prefix(), filename)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Base name and extension an upload is stored under.
///
/// `base` stops at the first `.` and `extension` starts after the last one, so
/// `my.video.mp4` is stored as `my.mp4`. A name with no `.` yields itself for
/// both halves (`clip` becomes `clip.clip`). Downloads look objects up by the
/// same derived name, so this must not change without migrating stored keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeyStem {
    pub base: String,
    pub extension: String,
}

impl StorageKeyStem {
    pub fn from_filename(filename: &str) -> Self {
        let mut parts = filename.split('.');
        let base = parts.next().unwrap_or_default().to_string();
        let extension = filename.rsplit('.').next().unwrap_or_default().to_string();
        Self { base, extension }
    }

    pub fn filename(&self) -> String {
        format!("{}.{}", self.base, self.extension)
    }

    pub fn key(&self, variant: Variant) -> String {
        variant.key_for(&self.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let stem = StorageKeyStem::from_filename("clip.mov");
        assert_eq!(stem.base, "clip");
        assert_eq!(stem.extension, "mov");
        assert_eq!(stem.key(Variant::Original), "original/clip.mov");
        assert_eq!(stem.key(Variant::Compressed), "compressed/clip.mov");
    }

    #[test]
    fn test_multi_dot_name_truncates_to_first_segment() {
        let stem = StorageKeyStem::from_filename("my.video.mp4");
        assert_eq!(stem.base, "my");
        assert_eq!(stem.extension, "mp4");
        assert_eq!(stem.key(Variant::Original), "original/my.mp4");
    }

    #[test]
    fn test_name_without_dot_repeats_itself() {
        let stem = StorageKeyStem::from_filename("clip");
        assert_eq!(stem.filename(), "clip.clip");
    }

    #[test]
    fn test_variant_prefixes() {
        assert_eq!(Variant::Compressed.key_for("x.mp4"), "compressed/x.mp4");
        assert_eq!(Variant::Original.to_string(), "original");
    }
}
