//! Filter chains: AND/OR combination with chain-level negation.
//!
//! A [`FilterChain`] holds an ordered set of members - single [`Filter`]s or
//! nested chains - a [`Combine`] tag, and a negation flag applied to the
//! chain's final result (not to each member). Evaluating a chain is a pure
//! function of the chain and one record.

use crate::filter::Filter;
use crate::record::Record;

/// How a chain combines its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combine {
    /// Match iff every member matches.
    #[default]
    All,
    /// Match iff at least one member matches.
    Any,
}

/// One member of a chain: a single filter or a nested group.
#[derive(Debug, Clone)]
pub enum ChainMember {
    /// A single predicate.
    Filter(Filter),
    /// A nested chain, evaluated as one boolean.
    Group(FilterChain),
}

impl ChainMember {
    fn matches(&self, record: &Record) -> bool {
        match self {
            ChainMember::Filter(filter) => filter.matches(record),
            ChainMember::Group(chain) => chain.matches(record),
        }
    }
}

/// An ordered set of filters combined with AND/OR logic.
///
/// An empty chain matches every record. The `negate` flag inverts the final
/// combined result, so double negation is always the identity.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    members: Vec<ChainMember>,
    combine: Combine,
    negate: bool,
}

impl FilterChain {
    /// Creates an empty AND chain.
    pub fn new() -> Self {
        FilterChain::default()
    }

    /// Creates an empty chain with the given combinator.
    pub fn with_combine(combine: Combine) -> Self {
        FilterChain {
            combine,
            ..Default::default()
        }
    }

    /// Sets the chain-level negation flag.
    pub fn negate(mut self, negate: bool) -> Self {
        self.negate = negate;
        self
    }

    /// Appends a filter.
    pub fn push(&mut self, filter: Filter) {
        self.members.push(ChainMember::Filter(filter));
    }

    /// Appends a nested chain.
    pub fn push_group(&mut self, chain: FilterChain) {
        self.members.push(ChainMember::Group(chain));
    }

    /// Returns the chain members in order.
    pub fn members(&self) -> &[ChainMember] {
        &self.members
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the chain has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the combinator.
    pub fn combine(&self) -> Combine {
        self.combine
    }

    /// Returns whether the chain result is negated.
    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Evaluates the chain against a record.
    pub fn matches(&self, record: &Record) -> bool {
        let result = if self.members.is_empty() {
            // No filters means match all.
            true
        } else {
            match self.combine {
                Combine::All => self.members.iter().all(|m| m.matches(record)),
                Combine::Any => self.members.iter().any(|m| m.matches(record)),
            }
        };

        if self.negate {
            !result
        } else {
            result
        }
    }

    /// Filters a record slice, returning indices of matching records.
    pub fn matching_indices(&self, records: &[Record]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::parse_expression;
    use crate::guard::RegexGuard;
    use serde_json::json;

    fn registry() -> Vec<Record> {
        [
            ("gpt-4o", json!({ "parent": "OpenAI", "enabled": 1 })),
            ("claude-sonnet", json!({ "parent": "Anthropic", "enabled": 0 })),
            ("gpt-4o-mini", json!({ "parent": "OpenAI", "enabled": 1 })),
        ]
        .into_iter()
        .map(|(name, attrs)| Record::new(name, attrs.as_object().unwrap().clone()))
        .collect()
    }

    fn parsed(expr: &str, guard: &mut RegexGuard) -> Filter {
        parse_expression(expr, false, guard).unwrap()
    }

    #[test]
    fn empty_chain_matches_all() {
        let chain = FilterChain::new();
        assert_eq!(chain.matching_indices(&registry()), vec![0, 1, 2]);

        let chain = FilterChain::with_combine(Combine::Any);
        assert_eq!(chain.matching_indices(&registry()), vec![0, 1, 2]);
    }

    #[test]
    fn and_chain_requires_every_member() {
        let mut guard = RegexGuard::new();
        let mut chain = FilterChain::new();
        chain.push(parsed("parent:equals:OpenAI", &mut guard));
        chain.push(parsed("enabled:>=:1", &mut guard));

        assert_eq!(chain.matching_indices(&registry()), vec![0, 2]);
    }

    #[test]
    fn or_chain_requires_any_member() {
        let mut guard = RegexGuard::new();
        let mut chain = FilterChain::with_combine(Combine::Any);
        chain.push(parsed("parent:equals:Anthropic", &mut guard));
        chain.push(parsed("model:ends_with:mini", &mut guard));

        assert_eq!(chain.matching_indices(&registry()), vec![1, 2]);
    }

    #[test]
    fn negated_chain_inverts_result() {
        let mut guard = RegexGuard::new();
        let mut chain = FilterChain::new().negate(true);
        chain.push(parsed("parent:equals:OpenAI", &mut guard));

        assert_eq!(chain.matching_indices(&registry()), vec![1]);
    }

    #[test]
    fn double_negation_is_identity() {
        let mut guard = RegexGuard::new();
        let mut inner = FilterChain::new().negate(true);
        inner.push(parsed("parent:equals:OpenAI", &mut guard));

        let mut outer = FilterChain::new().negate(true);
        outer.push_group(inner);

        let mut plain = FilterChain::new();
        plain.push(parsed("parent:equals:OpenAI", &mut guard));

        for record in &registry() {
            assert_eq!(outer.matches(record), plain.matches(record));
        }
    }

    #[test]
    fn nested_groups_evaluate_as_one_member() {
        let mut guard = RegexGuard::new();

        // parent == OpenAI AND (enabled == 0 OR model ends_with mini)
        let mut group = FilterChain::with_combine(Combine::Any);
        group.push(parsed("enabled:==:0", &mut guard));
        group.push(parsed("model:ends_with:mini", &mut guard));

        let mut chain = FilterChain::new();
        chain.push(parsed("parent:equals:OpenAI", &mut guard));
        chain.push_group(group);

        assert_eq!(chain.matching_indices(&registry()), vec![2]);
    }

    #[test]
    fn introspection() {
        let mut guard = RegexGuard::new();
        let mut chain = FilterChain::with_combine(Combine::Any).negate(true);
        chain.push(parsed("parent:equals:OpenAI", &mut guard));

        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert_eq!(chain.combine(), Combine::Any);
        assert!(chain.is_negated());
    }
}
