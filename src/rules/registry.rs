//! Ordered production rules with usage accounting
//!
//! Rules are appended to the registry and never removed; registry order is
//! the match priority (first match wins) and the tie-break when the registry
//! is stably reordered by usage. Selecting a rule increments its usage
//! counter as a side effect of the lookup, whether or not the caller applies
//! the recoloring.

use std::fmt;

use crate::spatial::neighborhood::ColorHistogram;

/// One requirement of a production rule: at least `count` neighbors of `color`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Minimum number of neighbors that must carry the color
    pub count: usize,
    /// Color label the neighbors are matched against
    pub color: String,
}

impl Term {
    /// Create a term requiring `count` neighbors of `color`
    pub fn new(count: usize, color: impl Into<String>) -> Self {
        Self {
            count,
            color: color.into(),
        }
    }
}

/// A production rule: a conjunction of terms and the color it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    terms: Vec<Term>,
    result: String,
    usage: u64,
}

impl Rule {
    /// Create a rule with a zeroed usage counter
    pub fn new(result: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            terms,
            result: result.into(),
            usage: 0,
        }
    }

    /// The color this rule recolors a tile to
    pub fn result(&self) -> &str {
        &self.result
    }

    /// The rule's terms in declaration order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// How many times this rule was selected as the best match
    pub const fn usage(&self) -> u64 {
        self.usage
    }

    /// Whether every term is satisfied by the histogram
    ///
    /// A term fails as soon as the histogram holds fewer occurrences of its
    /// color than required; a color absent from the histogram counts as zero.
    /// A rule with no terms matches vacuously, whatever the neighborhood.
    pub fn matches(&self, histogram: &ColorHistogram) -> bool {
        self.terms
            .iter()
            .all(|term| histogram.count(&term.color) >= term.count)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.result)?;
        for term in &self.terms {
            write!(f, " {} {}", term.count, term.color)?;
        }
        Ok(())
    }
}

/// Append-only ordered sequence of production rules
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule to the end of the registry with usage zero
    pub fn add_rule(&mut self, result: impl Into<String>, terms: Vec<Term>) {
        self.rules.push(Rule::new(result, terms));
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules were registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule at a registry position, if any
    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Iterate over the rules in current registry order
    ///
    /// Display snapshots use this; iteration never touches usage counters.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Select the first rule matching the histogram
    ///
    /// Scans the registry in current order and increments the winner's usage
    /// counter before returning it. The increment happens on selection, not
    /// on application: a lookup whose recoloring turns out to be a no-op
    /// still charges the rule.
    pub fn select(&mut self, histogram: &ColorHistogram) -> Option<&Rule> {
        let index = self.rules.iter().position(|rule| rule.matches(histogram))?;
        if let Some(rule) = self.rules.get_mut(index) {
            rule.usage += 1;
        }
        self.rules.get(index)
    }

    /// Stable ascending sort of the registry by usage counter
    ///
    /// Rules with equal counters keep their relative order, preserving the
    /// first-match-wins tie-break among them.
    pub fn reorder_by_usage(&mut self) {
        self.rules.sort_by_key(Rule::usage);
    }
}
