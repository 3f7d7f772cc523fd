//! Department classification and salary policy.

/// Departments with a fixed salary. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Hr,
    It,
    Sales,
    Other,
}

impl Department {
    /// Classify a free-form department name (case-insensitive).
    pub fn classify(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "hr" => Self::Hr,
            "it" => Self::It,
            "sales" => Self::Sales,
            _ => Self::Other,
        }
    }

    /// Fixed annual salary, `None` for unrecognized departments.
    pub fn salary(self) -> Option<f64> {
        match self {
            Self::Hr => Some(150_000.0),
            Self::It => Some(175_000.0),
            Self::Sales => Some(125_000.0),
            Self::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ignores_case() {
        assert_eq!(Department::classify("HR"), Department::Hr);
        assert_eq!(Department::classify("It"), Department::It);
        assert_eq!(Department::classify("sAlEs"), Department::Sales);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Department::classify(""), Department::Other);
        assert_eq!(Department::classify("Finance"), Department::Other);
        assert_eq!(Department::classify(" it "), Department::Other);
    }

    #[test]
    fn test_salary_table() {
        assert_eq!(Department::Hr.salary(), Some(150_000.0));
        assert_eq!(Department::It.salary(), Some(175_000.0));
        assert_eq!(Department::Sales.salary(), Some(125_000.0));
        assert_eq!(Department::Other.salary(), None);
    }
}
