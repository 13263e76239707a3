/// Accent color associated with a deployment version tag.
///
/// `v1` renders blue, `v2` renders green. Any other tag falls back to
/// green so an unexpected tag still renders as the rollout candidate
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Green,
}

impl Color {
    pub fn for_version(version: &str) -> Self {
        match version {
            "v1" => Color::Blue,
            "v2" => Color::Green,
            _ => Color::Green,
        }
    }

    /// CSS hex value used by the landing page template.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Blue => "#3b82f6",
            Color::Green => "#22c55e",
        }
    }
}

/// The immutable (version, color, hostname) tuple characterizing one
/// running instance. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct DeploymentIdentity {
    pub version: String,
    pub color: Color,
    pub hostname: String,
}

impl DeploymentIdentity {
    pub fn new(version: String) -> Self {
        Self::with_hostname(version, resolve_hostname())
    }

    pub fn with_hostname(version: String, hostname: String) -> Self {
        let color = Color::for_version(&version);
        Self {
            version,
            color,
            hostname,
        }
    }
}

fn resolve_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
