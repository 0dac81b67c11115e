mod normalizer;
mod rules;

pub use normalizer::{SpaceCollapse, TitleNormalizer};

/// Get the canonical form of a job title,
/// e.g. "  Senior Software Engineer (m/f/d)  " -> "senior software engineer (m/f/d)"
pub fn normalize_job_title(title: &str) -> String {
    TitleNormalizer::default().normalize(title)
}
