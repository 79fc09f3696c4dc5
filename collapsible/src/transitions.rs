use std::fmt;
use std::time::Duration;

/// Configuration for a height transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Render as a CSS transition value for the given property,
    /// e.g. `height 400ms linear`.
    pub fn css(&self, property: &str) -> String {
        format!(
            "{property} {}ms {}",
            self.duration.as_millis(),
            self.easing
        )
    }
}

/// Easing function for transitions.
///
/// Unknown timing functions (`cubic-bezier(...)`, `steps(...)`) are kept
/// verbatim in [`Easing::Custom`] so they still reach the output style;
/// animators interpolate them linearly.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom(String),
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear | Easing::Custom(_) => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Ease | Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Easing::Linear => "linear",
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::Custom(s) => s,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Easing {
    fn from(s: &str) -> Self {
        match s.trim() {
            "linear" => Easing::Linear,
            "ease" => Easing::Ease,
            "ease-in" => Easing::EaseIn,
            "ease-out" => Easing::EaseOut,
            "ease-in-out" => Easing::EaseInOut,
            other => Easing::Custom(other.to_string()),
        }
    }
}

impl From<String> for Easing {
    fn from(s: String) -> Self {
        Easing::from(s.as_str())
    }
}
