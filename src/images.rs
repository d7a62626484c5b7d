use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageLayout {
    /// Stretches to the width of its container.
    FullWidth,
    /// Rendered at exactly this many pixels wide.
    Fixed(u32),
    /// Shrinks with its container but never grows past this width.
    Constrained(u32),
}

/// A static image asset, relative to the assets directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub path: &'static str,
    pub layout: ImageLayout,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedImage {
    pub src: String,
    pub width: Option<u32>,
    pub max_width: Option<u32>,
}

impl ImageRef {
    pub const fn full_width(path: &'static str) -> Self {
        Self { path, layout: ImageLayout::FullWidth }
    }

    pub const fn fixed(path: &'static str, width: u32) -> Self {
        Self { path, layout: ImageLayout::Fixed(width) }
    }

    pub const fn constrained(path: &'static str, width: u32) -> Self {
        Self { path, layout: ImageLayout::Constrained(width) }
    }

    pub fn resolve(&self) -> ResolvedImage {
        let base = config::get_assets_url().trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        let (width, max_width) = match self.layout {
            ImageLayout::FullWidth => (None, None),
            ImageLayout::Fixed(w) => (Some(w), None),
            ImageLayout::Constrained(w) => (None, Some(w)),
        };

        ResolvedImage {
            src: format!("{}/{}", base, path),
            width,
            max_width,
        }
    }
}

impl ResolvedImage {
    pub fn style(&self) -> String {
        match (self.width, self.max_width) {
            (Some(w), _) => format!("width: {}px;", w),
            (None, Some(w)) => format!("width: 100%; max-width: {}px;", w),
            (None, None) => "width: 100%;".to_string(),
        }
    }
}
