//! File format filters
//!
//! A fixed enumeration of supported microscopy image formats. The active
//! filter decides which directory entries appear in the File Import list.
//! "All Supported" is the union of every format and the default.

use std::path::Path;

/// Extension filter applied to the directory listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatFilter {
    Tiff,
    Png,
    Jpeg,
    Nd2,
    #[default]
    AllSupported,
}

impl FormatFilter {
    /// All filters in dialog order ("All Supported" last, as in the
    /// original format dropdown)
    pub fn all() -> Vec<FormatFilter> {
        vec![
            FormatFilter::Tiff,
            FormatFilter::Png,
            FormatFilter::Jpeg,
            FormatFilter::Nd2,
            FormatFilter::AllSupported,
        ]
    }

    /// Display label for the filter dialog and status line
    pub fn label(&self) -> &'static str {
        match self {
            FormatFilter::Tiff => "TIFF Images",
            FormatFilter::Png => "PNG Images",
            FormatFilter::Jpeg => "JPEG Images",
            FormatFilter::Nd2 => "ND2 Images",
            FormatFilter::AllSupported => "All Supported",
        }
    }

    /// Extensions accepted by this filter, without the leading dot,
    /// lowercase
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatFilter::Tiff => &["tif", "tiff"],
            FormatFilter::Png => &["png"],
            FormatFilter::Jpeg => &["jpg", "jpeg"],
            FormatFilter::Nd2 => &["nd2"],
            FormatFilter::AllSupported => &["tif", "tiff", "png", "jpg", "jpeg", "nd2"],
        }
    }

    /// Whether a file name passes this filter. Comparison is on the
    /// lowercased extension; names without an extension never match.
    pub fn matches(&self, file_name: &str) -> bool {
        match Path::new(file_name).extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions().contains(&ext.as_str())
            }
            None => false,
        }
    }
}
