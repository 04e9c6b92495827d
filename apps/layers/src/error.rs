use std::borrow::Cow;

/// Reasons a Lambda layer could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    /// The layer's files are not mounted or cannot be read.
    #[error("Layer '{layer}' unavailable{}: {source}", format_context(.context))]
    Unavailable {
        layer: &'static str,
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    /// The layer is mounted but does not have the expected shape.
    #[error("Layer '{layer}' is malformed{}: {message}", format_context(.context))]
    Malformed { layer: &'static str, message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to layer results.
pub trait LayerErrorExt<T> {
    /// Wraps the error with `context`.
    ///
    /// # Errors
    /// Returns the original error, annotated.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LayerError>;
}

impl<T> LayerErrorExt<T> for Result<T, LayerError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                LayerError::Unavailable { context: c, .. } | LayerError::Malformed { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
