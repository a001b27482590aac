// src/matcher/combine.rs
// =============================================================================
// Boolean glue for matchers.
//
// Crawl rules are rarely a single matcher: "stay on example.com but skip
// /admin" is `match_hostname(..).and(match_pattern(..).not())`. Every
// combinator here is itself a Matcher, so they nest freely.
// =============================================================================

use super::Matcher;
use url::Url;

/// Both matchers must accept the URL.
#[derive(Debug, Clone)]
pub struct And<A, B>(A, B);

/// Either matcher may accept the URL.
#[derive(Debug, Clone)]
pub struct Or<A, B>(A, B);

/// Inverts a matcher.
#[derive(Debug, Clone)]
pub struct Not<M>(M);

impl<A: Matcher, B: Matcher> Matcher for And<A, B> {
    fn matches(&self, url: &Url) -> bool {
        self.0.matches(url) && self.1.matches(url)
    }
}

impl<A: Matcher, B: Matcher> Matcher for Or<A, B> {
    fn matches(&self, url: &Url) -> bool {
        self.0.matches(url) || self.1.matches(url)
    }
}

impl<M: Matcher> Matcher for Not<M> {
    fn matches(&self, url: &Url) -> bool {
        !self.0.matches(url)
    }
}

/// Combinator methods available on every [`Matcher`].
pub trait MatcherExt: Matcher + Sized {
    /// Accepts URLs both `self` and `other` accept.
    fn and<M: Matcher>(self, other: M) -> And<Self, M> {
        And(self, other)
    }

    /// Accepts URLs either `self` or `other` accepts.
    fn or<M: Matcher>(self, other: M) -> Or<Self, M> {
        Or(self, other)
    }

    /// Accepts exactly the URLs `self` rejects.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<M: Matcher> MatcherExt for M {}

/// Accepts a URL if any inner matcher does. Empty means nothing matches.
#[derive(Debug, Default)]
pub struct AnyOf {
    matchers: Vec<Box<dyn Matcher>>,
}

/// Accepts a URL if every inner matcher does. Empty means everything matches.
#[derive(Debug, Default)]
pub struct AllOf {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyOf {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }
}

impl AllOf {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }
}

impl Matcher for AnyOf {
    fn matches(&self, url: &Url) -> bool {
        self.matchers.iter().any(|m| m.matches(url))
    }
}

impl Matcher for AllOf {
    fn matches(&self, url: &Url) -> bool {
        self.matchers.iter().all(|m| m.matches(url))
    }
}

impl FromIterator<Box<dyn Matcher>> for AnyOf {
    fn from_iter<I: IntoIterator<Item = Box<dyn Matcher>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<Box<dyn Matcher>> for AllOf {
    fn from_iter<I: IntoIterator<Item = Box<dyn Matcher>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
