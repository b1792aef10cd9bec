//! Tier classification

use std::fmt;

/// Closed classification of a monitored tier, driving template selection.
///
/// Replaces string comparison on the controller's tier `type` field with an
/// exhaustive variant set: unknown runtime types fall back to [`TierKind::Base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierKind {
    /// JVM tier ("Application Server")
    Jvm,
    /// CLR tier (".NET Application Server")
    Clr,
    /// Synthetic monitoring (no tier lookup involved)
    Synthetic,
    /// Any other runtime type
    Base,
}

impl TierKind {
    /// Controller tier-type strings with a dedicated template set.
    const JVM_TYPE: &'static str = "Application Server";
    const CLR_TYPE: &'static str = ".NET Application Server";

    /// Classify a run from its monitoring mode and resolved tier type.
    ///
    /// Synthetic monitoring wins over any tier type; a run without a
    /// resolved tier type (and not synthetic) is `Base`.
    pub fn classify(synthetic: bool, tier_type: Option<&str>) -> Self {
        if synthetic {
            return TierKind::Synthetic;
        }
        match tier_type {
            Some(Self::JVM_TYPE) => TierKind::Jvm,
            Some(Self::CLR_TYPE) => TierKind::Clr,
            _ => TierKind::Base,
        }
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierKind::Jvm => write!(f, "jvm"),
            TierKind::Clr => write!(f, "clr"),
            TierKind::Synthetic => write!(f, "synthetic"),
            TierKind::Base => write!(f, "base"),
        }
    }
}
