//! Tests for rule matching, selection order, and usage-driven reordering

#[cfg(test)]
mod tests {
    use glowtile::rules::registry::{Rule, RuleRegistry, Term};
    use glowtile::spatial::neighborhood::ColorHistogram;

    fn histogram_of(colors: &[&str]) -> ColorHistogram {
        let mut histogram = ColorHistogram::new();
        for color in colors {
            histogram.record(color);
        }
        histogram
    }

    // Tests declaration order decides between matching rules
    // Verified by selecting the last match instead of the first
    #[test]
    fn test_first_matching_rule_wins() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("first", vec![Term::new(1, "red")]);
        registry.add_rule("second", vec![Term::new(1, "red")]);

        let histogram = histogram_of(&["red", "blue"]);
        let selected = registry.select(&histogram);
        assert_eq!(selected.map(Rule::result), Some("first"));
    }

    // Tests a rule matches only when every term is satisfied
    // Verified by accepting any single satisfied term
    #[test]
    fn test_rule_requires_every_term() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("gold", vec![Term::new(2, "red"), Term::new(1, "blue")]);

        assert!(registry.select(&histogram_of(&["red", "blue"])).is_none());
        assert!(registry.select(&histogram_of(&["red", "red", "blue"])).is_some());
    }

    // Tests surplus neighbors still satisfy a term
    // Verified by requiring exact counts
    #[test]
    fn test_term_counts_are_minimums() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("gold", vec![Term::new(1, "red")]);

        assert!(registry.select(&histogram_of(&["red", "red", "red"])).is_some());
    }

    // Tests selection charges the winning rule's usage counter
    // Verified by charging on failed matches as well
    #[test]
    fn test_selection_increments_usage() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("gold", vec![Term::new(1, "red")]);

        let histogram = histogram_of(&["red"]);
        registry.select(&histogram);
        registry.select(&histogram);
        registry.select(&histogram_of(&["blue"]));

        assert_eq!(registry.get(0).map(Rule::usage), Some(2));
    }

    // Tests a rule without terms matches any neighborhood
    // Verified by rejecting empty histograms
    #[test]
    fn test_zero_term_rule_matches_anything() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("default", Vec::new());

        let selected = registry.select(&ColorHistogram::new());
        assert_eq!(selected.map(Rule::result), Some("default"));
    }

    // Tests reordering keeps declaration order among equal usage counts
    // Verified by switching to an unstable sort
    #[test]
    fn test_reorder_is_stable_for_equal_usage() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("a", vec![Term::new(1, "red")]);
        registry.add_rule("b", vec![Term::new(1, "blue")]);
        registry.add_rule("c", vec![Term::new(1, "green")]);
        registry.add_rule("d", vec![Term::new(1, "yellow")]);

        // Charge a and c once each; b and d stay at zero
        registry.select(&histogram_of(&["red"]));
        registry.select(&histogram_of(&["green"]));

        registry.reorder_by_usage();

        let order: Vec<&str> = registry.rules().map(Rule::result).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    // Tests reordering hands priority to the less used rule
    // Verified by sorting in descending usage order
    #[test]
    fn test_reorder_changes_future_selection() {
        let mut registry = RuleRegistry::new();
        registry.add_rule("worn", vec![Term::new(1, "red")]);
        registry.add_rule("fresh", vec![Term::new(1, "red")]);

        let histogram = histogram_of(&["red"]);
        registry.select(&histogram);

        registry.reorder_by_usage();
        let selected = registry.select(&histogram);
        assert_eq!(selected.map(Rule::result), Some("fresh"));
    }

    // Tests the display form lists result then count-color pairs
    // Verified by omitting the colon after the result
    #[test]
    fn test_rule_display_format() {
        let rule = Rule::new("gold", vec![Term::new(1, "red"), Term::new(2, "blue")]);
        assert_eq!(rule.to_string(), "gold: 1 red 2 blue");

        let bare = Rule::new("gold", Vec::new());
        assert_eq!(bare.to_string(), "gold:");
    }

    // Tests registry length tracking and positional access
    // Verified by returning rules from the wrong index
    #[test]
    fn test_registry_access() {
        let mut registry = RuleRegistry::new();
        assert!(registry.is_empty());

        registry.add_rule("a", vec![Term::new(1, "red")]);
        registry.add_rule("b", vec![Term::new(2, "blue")]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(1).map(Rule::result), Some("b"));
        assert!(registry.get(2).is_none());
    }
}
