use crate::{Config, Error, Variant};
use image::{imageops::FilterType, ImageFormat, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

/// A file written by [`Converter::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub variant: Variant,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub fn ensure_dest_dir(dir: &Path) -> Result<(), Error> {
    tracing::debug!("ensuring destination directory {}", dir.display());
    std::fs::create_dir_all(dir).map_err(|e| Error::CreateDestDir(dir.to_owned(), e))
}

pub fn check_source(path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::SourceMissing(path.to_owned()))
    }
}

/// Decodes the image at `path` and converts it to 8-bit RGBA. The file is
/// closed before this returns.
pub fn open_rgba(path: &Path) -> Result<RgbaImage, Error> {
    tracing::debug!("opening {}", path.display());
    let image = ImageReader::open(path)
        .map_err(|e| Error::Open(path.to_owned(), e))?
        .with_guessed_format()
        .map_err(|e| Error::Open(path.to_owned(), e))?
        .decode()
        .map_err(|e| Error::Decode(path.to_owned(), e))?;
    Ok(image.to_rgba8())
}

pub fn render(variant: Variant, rgba: RgbaImage) -> RgbaImage {
    match variant {
        Variant::Main => rgba,
        Variant::Square(size) => {
            tracing::debug!(
                "resampling {}x{} to {}x{}",
                rgba.width(),
                rgba.height(),
                size,
                size
            );
            image::imageops::resize(&rgba, size, size, FilterType::Lanczos3)
        }
    }
}

pub fn save(image: &RgbaImage, path: &Path) -> Result<(), Error> {
    tracing::debug!("writing {}", path.display());
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Write(path.to_owned(), e))
}

fn warn_on_distortion(image: &RgbaImage, sizes: &[u32]) {
    let (width, height) = image.dimensions();
    if width != height {
        tracing::warn!(
            "source image is {}x{}, square variants will be distorted",
            width,
            height
        );
    }
    if let Some(&largest) = sizes.iter().max() {
        if width < largest || height < largest {
            tracing::warn!(
                "source image is {}x{}, the {}x{} variant will be upscaled",
                width,
                height,
                largest,
                largest
            );
        }
    }
}

#[derive(Debug, Clone)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    /// The files [`Converter::run`] would write, in order.
    pub fn plan(&self) -> Vec<(Variant, PathBuf)> {
        Variant::all(&self.config.sizes)
            .into_iter()
            .map(|variant| (variant, variant.path_in(&self.config.dest_dir)))
            .collect()
    }

    /// Writes every variant, calling `on_saved` after each file is written.
    ///
    /// The destination directory is created first. If the source is missing,
    /// [`Error::SourceMissing`] is returned before any image is written. A
    /// failure partway through leaves the files already written in place.
    pub fn run(&self, mut on_saved: impl FnMut(&Output)) -> Result<Vec<Output>, Error> {
        ensure_dest_dir(&self.config.dest_dir)?;
        check_source(&self.config.source)?;

        let mut outputs = Vec::new();
        for (variant, path) in self.plan() {
            let source = open_rgba(&self.config.source)?;
            if variant == Variant::Main {
                warn_on_distortion(&source, &self.config.sizes);
            }
            let image = render(variant, source);
            save(&image, &path)?;

            let output = Output {
                variant,
                path,
                width: image.width(),
                height: image.height(),
            };
            on_saved(&output);
            outputs.push(output);
        }
        Ok(outputs)
    }
}
