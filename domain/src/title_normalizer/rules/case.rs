pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}
