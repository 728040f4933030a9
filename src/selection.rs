//! Background/secondary/overlay color resolution under contrast constraints.
//!
//! Randomly requested backgrounds are redrawn until every constraint holds.
//! Fixed backgrounds are never silently replaced: a violated constraint is
//! returned to the caller as an error.

use tracing::{debug, info};

use crate::color::ColorValue;
use crate::contrast::check_contrast_bound;
use crate::contrast_solver::invert_with_min_contrast;
use crate::error::ColorError;
use crate::names::{ColorNames, normalized};
use crate::parse::parse_color;
use crate::random::ColorSource;

/// Marker requesting a random background.
pub const RANDOM_MARKER: &str = "random";

/// Marker requesting the inverted background as secondary color.
pub const INVERTED_MARKER: &str = "inverted";

/// How the background color is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundRequest {
    /// A user-fixed color
    Fixed(ColorValue),
    /// Draw from the random source
    Random,
}

impl BackgroundRequest {
    /// Parse `"random"` (any case/spacing) or a color specification.
    pub fn parse(input: &str, names: &ColorNames) -> Result<Self, ColorError> {
        if normalized(input) == RANDOM_MARKER {
            Ok(Self::Random)
        } else {
            parse_color(input, names).map(Self::Fixed)
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }
}

/// How the secondary (highlight) color is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum SecondaryRequest {
    /// Inverted background, honoring the request's minimum contrast
    Inverted,
    /// An explicit color specification, parsed without contrast checks
    Explicit(String),
}

impl SecondaryRequest {
    /// Recognise `"inverted"` (any case/spacing); anything else is explicit.
    pub fn parse(input: &str) -> Self {
        if normalized(input) == INVERTED_MARKER {
            Self::Inverted
        } else {
            Self::Explicit(input.to_string())
        }
    }
}

/// Minimum contrast the background must keep against an overlay color.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConstraint {
    pub color: ColorValue,
    pub min_contrast: f64,
}

/// Everything the policy needs to resolve a color set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRequest {
    pub background: BackgroundRequest,
    pub secondary: SecondaryRequest,
    /// Minimum contrast between background and an inverted secondary color
    pub min_contrast: Option<f64>,
    pub overlay: Option<OverlayConstraint>,
    /// Cap on random draws; `None` retries without bound
    pub max_attempts: Option<usize>,
}

impl SelectionRequest {
    /// Random background, inverted secondary, no constraints.
    pub fn random() -> Self {
        Self {
            background: BackgroundRequest::Random,
            secondary: SecondaryRequest::Inverted,
            min_contrast: None,
            overlay: None,
            max_attempts: None,
        }
    }
}

/// A resolved, mutually consistent set of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub background: ColorValue,
    pub secondary: ColorValue,
    pub overlay: Option<ColorValue>,
}

/// Resolves [`SelectionRequest`]s against a name table.
#[derive(Debug, Clone, Copy)]
pub struct ColorSelectionPolicy<'a> {
    names: &'a ColorNames,
}

/// Counts random draws against an optional cap.
struct Draws<'s, S: ?Sized> {
    source: &'s mut S,
    count: usize,
    limit: Option<usize>,
}

impl<S: ColorSource + ?Sized> Draws<'_, S> {
    fn next(&mut self) -> Result<ColorValue, ColorError> {
        if self.limit.is_some_and(|limit| self.count >= limit) {
            return Err(ColorError::RetryLimitExceeded {
                attempts: self.count,
            });
        }
        self.count += 1;
        let color = self.source.next_color();
        debug!(draw = self.count, color = %color, "Drew random background");
        Ok(color)
    }
}

impl<'a> ColorSelectionPolicy<'a> {
    pub fn new(names: &'a ColorNames) -> Self {
        Self { names }
    }

    /// Resolve background, secondary and overlay colors.
    ///
    /// `source` is only consulted when the background is [`BackgroundRequest::Random`].
    ///
    /// # Errors
    ///
    /// * [`ColorError::InvalidArgument`] for contrast bounds outside of `[1, 21]`
    /// * [`ColorError::ContrastUnsatisfiable`] when a fixed background violates a
    ///   constraint
    /// * [`ColorError::InvalidColor`] when an explicit secondary color is malformed
    /// * [`ColorError::RetryLimitExceeded`] when `max_attempts` random draws fail
    pub fn resolve<S>(
        &self,
        request: &SelectionRequest,
        source: &mut S,
    ) -> Result<Selection, ColorError>
    where
        S: ColorSource + ?Sized,
    {
        if let Some(min_contrast) = request.min_contrast {
            check_contrast_bound(min_contrast)?;
        }
        if let Some(overlay) = &request.overlay {
            check_contrast_bound(overlay.min_contrast)?;
        }

        let mut draws = Draws {
            source,
            count: 0,
            limit: request.max_attempts,
        };

        let is_random = request.background.is_random();
        let mut background = match &request.background {
            BackgroundRequest::Fixed(color) => color.clone(),
            BackgroundRequest::Random => draws.next()?,
        };

        loop {
            if let Some(overlay) = &request.overlay {
                let achieved = background.contrast_ratio(&overlay.color);
                if !is_random && achieved < overlay.min_contrast {
                    return Err(ColorError::ContrastUnsatisfiable {
                        min_contrast: overlay.min_contrast,
                        reason: format!(
                            "fixed background {background} has contrast {achieved:.2} \
                             against overlay {}",
                            overlay.color
                        ),
                    });
                }

                while background.contrast_ratio(&overlay.color) < overlay.min_contrast {
                    background = draws.next()?;
                }
            }

            let secondary = match &request.secondary {
                SecondaryRequest::Inverted => {
                    match invert_with_min_contrast(&background, request.min_contrast, self.names) {
                        Ok(color) => color,
                        Err(err) if is_random && err.is_contrast_unsatisfiable() => {
                            debug!(error = %err, "Inversion failed, redrawing background");
                            background = draws.next()?;
                            continue;
                        }
                        Err(err) => return Err(err),
                    }
                }
                SecondaryRequest::Explicit(input) => parse_color(input, self.names)?,
            };

            info!(
                background = %background,
                secondary = %secondary,
                draws = draws.count,
                "Resolved colors"
            );

            return Ok(Selection {
                background,
                secondary,
                overlay: request.overlay.as_ref().map(|o| o.color.clone()),
            });
        }
    }
}
