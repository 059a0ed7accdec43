//! Include/exclude rules deciding which loggers are active

/// Decides whether a logger is enabled from two comma separated name lists.
///
/// Rules, in order:
/// * with no rules at all, everything is enabled
/// * an excluded name is disabled, even if it is also included
/// * an included name is enabled
/// * once anything is included, every other name is disabled
/// * otherwise the name is enabled
///
/// Names match exactly.
///
/// # Examples
///
/// ```
/// use rust_named_logger::LogSelector;
///
/// let mut selector = LogSelector::new();
/// selector.set_include_rule("Net,Db");
/// assert!(selector.should_enable("Net"));
/// assert!(!selector.should_enable("Ui"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSelector {
    include_rule: String,
    exclude_rule: String,
    included: Vec<String>,
    excluded: Vec<String>,
}

impl LogSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(include: &str, exclude: &str) -> Self {
        let mut selector = Self::new();
        selector.set_include_rule(include);
        selector.set_exclude_rule(exclude);
        selector
    }

    pub fn set_include_rule(&mut self, rule: &str) {
        self.include_rule = rule.to_string();
        self.included = parse_csv(rule);
    }

    pub fn set_exclude_rule(&mut self, rule: &str) {
        self.exclude_rule = rule.to_string();
        self.excluded = parse_csv(rule);
    }

    pub fn include_rule(&self) -> &str {
        &self.include_rule
    }

    pub fn exclude_rule(&self) -> &str {
        &self.exclude_rule
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn should_enable(&self, name: &str) -> bool {
        if self.include_rule.is_empty() && self.exclude_rule.is_empty() {
            return true;
        }
        if self.is_excluded(name) {
            return false;
        }
        if self.is_included(name) {
            return true;
        }
        self.included.is_empty()
    }

    fn is_included(&self, name: &str) -> bool {
        self.included.iter().any(|n| n == name)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.excluded.iter().any(|n| n == name)
    }
}

fn parse_csv(rule: &str) -> Vec<String> {
    rule.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
