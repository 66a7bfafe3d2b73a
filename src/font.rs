use crate::{Px, TextFitError};
use owned_ttf_parser::{AsFaceRef, OwnedFace};

/// A parsed font object. Fonts can be TTF or OTF fonts. The face is kept in
/// memory for the lifetime of the object; all metric queries scale the raw
/// font-unit values by the requested pixel size.
///
/// A [Font] only answers metric questions (glyph advances, vertical metrics,
/// glyph lookup). Turning those answers into paragraph measurements is the job
/// of [crate::FaceBackend] and the [crate::measure] module.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, TextFitError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Load a font from a file on disk
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Font, TextFitError> {
        Font::load(std::fs::read(path)?)
    }

    /// Obtain the full name of the font. Panics if the font does not have a name
    pub fn name(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a name")
    }

    /// Obtain the family name of the font. Panics if the font does not have a font family
    pub fn family(&self) -> String {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
            .expect("font face has a family")
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text, and is a
    /// reasonable value for the line-height options of [crate::measure::ParagraphOptions]
    pub fn line_height(&self, size: Px) -> Px {
        let scaling: Px = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Px = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Px = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Px = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 200: Extra Light (Ultra Light)
    /// * 300: Light
    /// * 400: Normal
    /// * 500: Medium
    /// * 600: Semi Bold (Demi Bold)
    /// * 700: Bold
    /// * 800: Extra Bold (Ultra Bold)
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }
}
