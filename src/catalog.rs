// SPDX-License-Identifier: MPL-2.0
//! Artwork catalogs.
//!
//! A [`Catalog`] is the immutable list of artworks handed to the gallery at
//! startup. It is either the built-in set or read from a TOML file:
//!
//! ```toml
//! [[artwork]]
//! image = "river.jpg"
//! title = "River Blake"
//! artist = "Blake Spear"
//! year = "2003"
//! ```
//!
//! Relative `image` paths are resolved against the directory holding the
//! catalog file. An empty catalog loads fine; [`Catalog::into_gallery`] is
//! where it gets rejected.

use crate::domain::{Artwork, Gallery, ImageRef};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Directory holding the images of the built-in catalog.
pub const BUILTIN_IMAGE_DIR: &str = "assets/artworks";

/// Records of the built-in catalog: (file name, title, artist, year).
const BUILTIN: [(&str, &str, &str, &str); 3] = [
    (
        "manuel_meurisse_unsplash.jpg",
        "River Blake",
        "Blake Spear",
        "2003",
    ),
    (
        "possessed_photography_unsplash.jpg",
        "Robo",
        "Possessed Photography",
        "2015",
    ),
    (
        "andrea_de_santis_unsplash.jpg",
        "A.I in real life",
        "Hi Tech Company",
        "2022",
    ),
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    artwork: Vec<ArtworkEntry>,
}

#[derive(Debug, Deserialize)]
struct ArtworkEntry {
    image: String,
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    year: String,
}

/// Immutable, ordered list of artworks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// The three artworks shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if a built-in record fails validation.
    pub fn builtin() -> Result<Self> {
        let base = Path::new(BUILTIN_IMAGE_DIR);
        let artworks = BUILTIN
            .iter()
            .map(|(file, title, artist, year)| {
                Artwork::new(ImageRef::new(base.join(file)), *title, *artist, *year).map_err(
                    |source| Error::Catalog {
                        path: base.to_path_buf(),
                        source,
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { artworks })
    }

    /// Reads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains an artwork with a blank title.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base).map_err(|err| match err {
            Error::Catalog { source, .. } => Error::Catalog {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses catalog TOML, resolving relative images against `base`.
    fn parse(content: &str, base: &Path) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let artworks = file
            .artwork
            .into_iter()
            .map(|entry| {
                Artwork::new(ImageRef::new(entry.image), entry.title, entry.artist, entry.year)
                    .map(|art| art.with_image_base(base))
                    .map_err(|source| Error::Catalog {
                        path: base.to_path_buf(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { artworks })
    }

    #[must_use]
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Builds the gallery state from this catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Gallery`] if the catalog is empty.
    pub fn into_gallery(self) -> Result<Gallery> {
        Ok(Gallery::new(self.artworks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtworkError, GalleryError};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn builtin_catalog_has_three_records_in_order() {
        let catalog = Catalog::builtin().expect("builtin records are valid");
        let titles: Vec<&str> = catalog.artworks().iter().map(Artwork::title).collect();
        assert_eq!(titles, ["River Blake", "Robo", "A.I in real life"]);

        let first = &catalog.artworks()[0];
        assert_eq!(first.artist(), "Blake Spear");
        assert_eq!(first.year(), "2003");
        assert!(first.image().path().starts_with(BUILTIN_IMAGE_DIR));
    }

    #[test]
    fn load_from_path_resolves_relative_images() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[artwork]]
image = "robo.jpg"
title = "Robo"
artist = "Possessed Photography"
year = "2015"

[[artwork]]
image = "nested/river.jpg"
title = "River Blake"
"#,
        )
        .expect("failed to write catalog");

        let catalog = Catalog::load_from_path(&path).expect("catalog should load");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.artworks()[0].image().path(),
            dir.path().join("robo.jpg")
        );
        assert_eq!(
            catalog.artworks()[1].image().path(),
            dir.path().join("nested/river.jpg")
        );
        assert_eq!(catalog.artworks()[1].artist(), "");
    }

    #[test]
    fn blank_title_reports_the_catalog_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[artwork]]\nimage = \"a.jpg\"\ntitle = \" \"\n")
            .expect("failed to write catalog");

        match Catalog::load_from_path(&path) {
            Err(Error::Catalog { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source, ArtworkError::EmptyTitle);
            }
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[artwork]\ntitle = ").expect("failed to write catalog");
        assert!(matches!(Catalog::load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let path = PathBuf::from("/definitely/not/here/catalog.toml");
        match Catalog::load_from_path(&path) {
            Err(err @ Error::CatalogIo { .. }) => {
                assert!(err.to_string().contains("/definitely/not/here/catalog.toml"));
            }
            other => panic!("expected catalog I/O error, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_loads_but_cannot_become_a_gallery() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").expect("failed to write catalog");

        let catalog = Catalog::load_from_path(&path).expect("empty catalog parses");
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.into_gallery(),
            Err(Error::Gallery(GalleryError::Empty))
        ));
    }

    #[test]
    fn builtin_catalog_becomes_a_gallery() {
        let gallery = Catalog::builtin()
            .and_then(Catalog::into_gallery)
            .expect("builtin is non-empty");
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.current().title(), "River Blake");
    }
}
