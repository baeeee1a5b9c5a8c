use softbuffer::SoftBufferError;

/// High-level response after a presentation error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Transient error; skip the current frame.
    SkipFrame,
    /// The surface cannot be used anymore; terminate gracefully.
    Fatal,
}

pub(crate) fn classify_surface_error(err: &SoftBufferError) -> SurfaceErrorAction {
    match err {
        SoftBufferError::SizeOutOfRange { .. }
        | SoftBufferError::DamageOutOfRange { .. }
        | SoftBufferError::PlatformError(..) => SurfaceErrorAction::SkipFrame,
        _ => SurfaceErrorAction::Fatal,
    }
}
