mod backend;
pub use backend::*;

mod descriptor;
pub use descriptor::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Word breaking, glyph metrics caching, line wrapping, and font-size fitting
pub mod measure;

mod units;
pub use units::*;

/// Re-export unicode-linebreak functionality, mostly for callers that want to
/// inspect break opportunities themselves
pub use unicode_linebreak;
