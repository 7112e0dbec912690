use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// One output file derived from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full-size RGBA copy of the source.
    Main,
    /// RGBA resample forced to `n`×`n` pixels.
    Square(u32),
}

impl Variant {
    /// The main copy followed by one square variant per size, in order.
    pub fn all(sizes: &[u32]) -> Vec<Variant> {
        std::iter::once(Variant::Main)
            .chain(sizes.iter().map(|&size| Variant::Square(size)))
            .collect()
    }

    pub fn file_name(&self) -> String {
        match self {
            Variant::Main => "favicon.png".to_owned(),
            Variant::Square(size) => format!("favicon-{}x{}.png", size, size),
        }
    }

    pub fn path_in(&self, dest_dir: &Path) -> PathBuf {
        dest_dir.join(self.file_name())
    }

    /// The console line announcing that this variant was written to `path`.
    pub fn saved_message(&self, path: &Path) -> String {
        match self {
            Variant::Main => format!("Saved main favicon: {}", path.display()),
            Variant::Square(_) => format!("Saved {}", path.display()),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Main => write!(f, "main"),
            Variant::Square(size) => write!(f, "{}x{}", size, size),
        }
    }
}
