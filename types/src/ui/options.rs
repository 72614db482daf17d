use crate::FormFactor;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    /// Monochrome palette; also switches the flash overlay to the black/white rule.
    pub high_contrast: bool,
    /// No screen shake and no flashing colours.
    pub reduced_motion: bool,
    pub form_factor: FormFactor,
}
