// SPDX-License-Identifier: MPL-2.0
//! Styled caption shown under the artwork title.
//!
//! The caption is built from borrowed artist and year strings and never
//! modifies them. The view layer maps each [`Segment`] to a rich text span.

/// Font weight of a caption segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

/// A run of text drawn with a single weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub weight: Weight,
}

/// Two-segment caption: the artist in normal weight, then ` (year)` in bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    segments: [Segment; 2],
}

impl Caption {
    #[must_use]
    pub fn artist_and_year(artist: &str, year: &str) -> Self {
        Self {
            segments: [
                Segment {
                    text: artist.to_owned(),
                    weight: Weight::Normal,
                },
                Segment {
                    text: format!(" ({year})"),
                    weight: Weight::Bold,
                },
            ],
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Concatenation of all segments without styling.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_is_normal_and_year_is_bold() {
        let caption = Caption::artist_and_year("Blake Spear", "2003");
        assert_eq!(caption.plain_text(), "Blake Spear (2003)");
        assert_eq!(
            caption.segments(),
            &[
                Segment {
                    text: "Blake Spear".to_string(),
                    weight: Weight::Normal,
                },
                Segment {
                    text: " (2003)".to_string(),
                    weight: Weight::Bold,
                },
            ]
        );
    }

    #[test]
    fn empty_inputs_still_produce_two_segments() {
        let caption = Caption::artist_and_year("", "");
        assert_eq!(caption.segments().len(), 2);
        assert_eq!(caption.plain_text(), " ()");
    }

    #[test]
    fn inputs_are_left_untouched() {
        let artist = String::from("Hi Tech Company");
        let year = String::from("2022");
        let _ = Caption::artist_and_year(&artist, &year);
        assert_eq!(artist, "Hi Tech Company");
        assert_eq!(year, "2022");
    }
}
