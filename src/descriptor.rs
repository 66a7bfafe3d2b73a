use crate::Px;
use std::fmt;

/// The slant component of a font descriptor
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontStyle {
    /// Upright; contributes nothing to the rendered descriptor
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// The weight component of a font descriptor
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontWeight {
    /// Regular weight; contributes nothing to the rendered descriptor
    #[default]
    Normal,
    Bold,
    Bolder,
    Lighter,
    /// A numeric weight, typically 100–900 in steps of 100
    Numeric(u16),
}

/// A font selection rendered into one canonical string, e.g.
/// `italic 700 24px "Arial"`. The rendered form doubles as the first-level
/// metrics cache key and is what string-oriented measurement backends consume,
/// so two descriptors that render identically are interchangeable.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub style: FontStyle,
    pub weight: FontWeight,
    pub size: Px,
    pub family: String,
}

impl FontDescriptor {
    pub fn new<S: Into<String>>(family: S, size: Px) -> FontDescriptor {
        FontDescriptor {
            style: FontStyle::default(),
            weight: FontWeight::default(),
            size,
            family: family.into(),
        }
    }

    /// Replace the size, keeping every other component. The fitter uses this
    /// to derive per-candidate descriptors during the font-size search.
    pub fn with_size(&self, size: Px) -> FontDescriptor {
        FontDescriptor {
            size,
            ..self.clone()
        }
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => write!(f, "italic ")?,
            FontStyle::Oblique => write!(f, "oblique ")?,
        }
        match self.weight {
            FontWeight::Normal => {}
            FontWeight::Bold => write!(f, "bold ")?,
            FontWeight::Bolder => write!(f, "bolder ")?,
            FontWeight::Lighter => write!(f, "lighter ")?,
            FontWeight::Numeric(weight) => write!(f, "{weight} ")?,
        }
        write!(f, "{}px \"{}\"", self.size, self.family)
    }
}
