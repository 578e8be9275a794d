//! The injectable regex-to-example-string sampler.
//!
//! Pattern-constrained strings are the one non-deterministic corner of
//! synthesis, so the sampler is a capability the resolver receives rather
//! than a baked-in dependency: production uses [`RegexSampler`] (backed by
//! `rand_regex`), tests substitute [`FixedSampler`].

use rand::Rng;

/// Produces an example string matching a regex pattern.
///
/// Returning `None` signals that the pattern cannot be satisfied; the
/// resolver recovers with a fixed fallback literal and never propagates the
/// failure.
pub trait PatternSampler: Send + Sync {
    /// Generate one string matching `pattern`, or `None` when the pattern is
    /// unsupported.
    fn sample(&self, pattern: &str) -> Option<String>;
}

/// Production sampler: compiles the pattern with `rand_regex` and draws one
/// sample from the thread-local RNG. Reentrant; every call owns its RNG
/// handle, so concurrent invocations never share generator state.
#[derive(Debug, Clone)]
pub struct RegexSampler {
    max_repeat: u32,
}

impl RegexSampler {
    /// Default bound for unbounded repetitions (`*`, `+`, `{n,}`).
    pub const DEFAULT_MAX_REPEAT: u32 = 4;

    /// Create a sampler with the default repetition bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_repeat: Self::DEFAULT_MAX_REPEAT,
        }
    }

    /// Override the repetition bound.
    #[must_use]
    pub fn with_max_repeat(max_repeat: u32) -> Self {
        Self { max_repeat }
    }
}

impl Default for RegexSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSampler for RegexSampler {
    fn sample(&self, pattern: &str) -> Option<String> {
        let dist = rand_regex::Regex::compile(strip_anchors(pattern), self.max_repeat).ok()?;
        Some(rand::thread_rng().sample(&dist))
    }
}

/// Deterministic sampler returning one fixed string, for tests.
#[derive(Debug, Clone)]
pub struct FixedSampler(pub String);

impl PatternSampler for FixedSampler {
    fn sample(&self, _pattern: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Strip leading `^` and trailing (unescaped) `$` anchors.
///
/// Model patterns routinely anchor both ends; the sample generator rejects
/// anchors outright, and for generation they carry no information.
fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    match pattern.strip_suffix('$') {
        Some(stripped) if !stripped.ends_with('\\') => stripped,
        _ => pattern,
    }
}
