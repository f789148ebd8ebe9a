use std::error::Error;
use std::fmt;
use std::io;

/// A scene value that violates its construction invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionError {
    ColorOutOfRange { r: f64, g: f64, b: f64 },
    NegativeRadius(f64),
    NegativeWidth(f64),
    NegativeHeight(f64),
    ZeroLightDirection,
    EmptyImage { width: u32, height: u32 },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::ColorOutOfRange { r, g, b } => {
                write!(f, "color value(s) out of range [0,1]: (r={},g={},b={})", r, g, b)
            }
            ConstructionError::NegativeRadius(r) => write!(f, "sphere radius must be non-negative, got {}", r),
            ConstructionError::NegativeWidth(w) => write!(f, "rectangle width must be non-negative, got {}", w),
            ConstructionError::NegativeHeight(h) => write!(f, "rectangle height must be non-negative, got {}", h),
            ConstructionError::ZeroLightDirection => write!(f, "directional light has a zero-length direction"),
            ConstructionError::EmptyImage { width, height } => {
                write!(f, "image dimensions must be nonzero (got {}x{})", width, height)
            }
        }
    }
}

impl Error for ConstructionError {}

#[derive(Debug)]
pub enum ParseError {
    Malformed { line: usize, directive: String, reason: String },
    Construction { line: usize, source: ConstructionError },
    MissingEnvironment,
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed { line, directive, reason } => {
                write!(f, "line {}: malformed {} directive: {}", line, directive, reason)
            }
            ParseError::Construction { line, source } => write!(f, "line {}: {}", line, source),
            ParseError::MissingEnvironment => write!(f, "scene description has no ENV directive"),
            ParseError::Io(e) => write!(f, "failed reading scene description: {}", e),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Construction { source, .. } => Some(source),
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

#[derive(Debug)]
pub enum RenderError {
    ColorOutOfRange(f64),
    Io(io::Error),
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::ColorOutOfRange(x) => write!(f, "color channel out of range: {}", x),
            RenderError::Io(e) => write!(f, "failed writing image: {}", e),
            RenderError::Image(e) => write!(f, "failed encoding image: {}", e),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::ColorOutOfRange(_) => None,
            RenderError::Io(e) => Some(e),
            RenderError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
