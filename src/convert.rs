//! Script-variant conversion applied to corpus words before indexing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(
        "conversion to simplified was requested but this build has no \
        traditional-to-simplified converter (rebuild with the `t2s` feature)"
    )]
    Unavailable,
}

/// Rewrites text from one script variant into another.
pub trait ScriptConverter {
    /// Short label used in logs.
    fn name(&self) -> &str;

    fn convert(&self, text: &str) -> String;
}

/// Traditional to simplified Chinese, backed by `zhconv`.
#[cfg(feature = "t2s")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TraditionalToSimplified;

#[cfg(feature = "t2s")]
impl ScriptConverter for TraditionalToSimplified {
    fn name(&self) -> &str {
        "t2s"
    }

    fn convert(&self, text: &str) -> String {
        zhconv::zhconv(text, zhconv::Variant::ZhHans)
    }
}

/// The traditional-to-simplified converter, if this build carries one.
pub fn simplified_converter() -> Result<Box<dyn ScriptConverter>, ConvertError> {
    #[cfg(feature = "t2s")]
    {
        Ok(Box::new(TraditionalToSimplified))
    }
    #[cfg(not(feature = "t2s"))]
    {
        Err(ConvertError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "t2s")]
    #[test]
    fn converts_traditional_words() {
        let converter = simplified_converter().expect("t2s available");
        assert_eq!(converter.name(), "t2s");
        assert_eq!(converter.convert("愛心"), "爱心");
        assert_eq!(converter.convert("爱心"), "爱心");
    }

    #[cfg(not(feature = "t2s"))]
    #[test]
    fn missing_converter_is_reported() {
        assert!(matches!(
            simplified_converter(),
            Err(ConvertError::Unavailable)
        ));
    }
}
