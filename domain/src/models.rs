use crate::title_normalizer::TitleNormalizer;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Job {
    pub title: String,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title with the normalized form of `s`.
    pub fn parse_title_from_str(&mut self, s: &str) {
        self.title = TitleNormalizer::default().normalize(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_has_empty_title() {
        assert_eq!(Job::new().title, "");
    }

    #[test]
    fn test_parse_title_from_str() {
        let mut job = Job::new();
        job.parse_title_from_str("  Senior Software Engineer (m/f/d)  ");
        assert_eq!(job.title, "senior software engineer (m/f/d)");
    }

    #[test]
    fn test_parse_title_from_str_replaces_previous_title() {
        let mut job = Job::new();
        job.parse_title_from_str("Data  Engineer");
        job.parse_title_from_str("  Junior Software Engineer (m/f/d)  ");
        assert_eq!(job.title, "junior software engineer (m/f/d)");
    }
}
