//! Article layout of the will.
//!
//! Which optional articles appear is decided once, up front, and each
//! article's numeral is its 1-based position in the plan.
use crate::common::numeral::roman;
use crate::will::input::WillInput;
use smallvec::SmallVec;

/// One article of the will.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleKind {
    Declaration,
    Executor,
    Guardian,
    SpecificGifts,
    Residuary,
    GeneralProvisions,
}

impl ArticleKind {
    /// Heading title, without the article number.
    pub const fn title(self) -> &'static str {
        match self {
            ArticleKind::Declaration => "DECLARATION",
            ArticleKind::Executor => "EXECUTOR",
            ArticleKind::Guardian => "GUARDIAN",
            ArticleKind::SpecificGifts => "SPECIFIC GIFTS",
            ArticleKind::Residuary => "RESIDUARY ESTATE",
            ArticleKind::GeneralProvisions => "GENERAL PROVISIONS",
        }
    }

    /// Full heading text for this article under `numeral`, e.g. `ARTICLE III: RESIDUARY ESTATE`.
    pub fn heading(self, numeral: &str) -> String {
        format!("ARTICLE {}: {}", numeral, self.title())
    }
}

/// Ordered list of the articles present in a will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePlan {
    articles: SmallVec<[ArticleKind; 6]>,
}

impl ArticlePlan {
    /// Plan the articles for `will`.
    pub fn for_will(will: &WillInput) -> Self {
        Self::with_options(will.guardian().is_some(), !will.specific_gifts.is_empty())
    }

    pub fn with_options(guardian: bool, specific_gifts: bool) -> Self {
        let mut articles = SmallVec::new();
        articles.push(ArticleKind::Declaration);
        articles.push(ArticleKind::Executor);
        if guardian {
            articles.push(ArticleKind::Guardian);
        }
        if specific_gifts {
            articles.push(ArticleKind::SpecificGifts);
        }
        articles.push(ArticleKind::Residuary);
        articles.push(ArticleKind::GeneralProvisions);
        Self { articles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Articles with their numerals, in order.
    pub fn iter(&self) -> impl Iterator<Item = (String, ArticleKind)> + '_ {
        self.articles
            .iter()
            .enumerate()
            .map(|(i, &kind)| (roman(i + 1), kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(plan: &ArticlePlan) -> Vec<String> {
        plan.iter()
            .map(|(numeral, kind)| kind.heading(&numeral))
            .collect()
    }

    fn numeral_of(plan: &ArticlePlan, wanted: ArticleKind) -> Option<String> {
        plan.iter()
            .find(|(_, kind)| *kind == wanted)
            .map(|(numeral, _)| numeral)
    }

    #[test]
    fn test_minimal_plan() {
        let plan = ArticlePlan::with_options(false, false);
        assert_eq!(plan.len(), 4);
        assert_eq!(
            headings(&plan),
            vec![
                "ARTICLE I: DECLARATION",
                "ARTICLE II: EXECUTOR",
                "ARTICLE III: RESIDUARY ESTATE",
                "ARTICLE IV: GENERAL PROVISIONS",
            ]
        );
        assert_eq!(numeral_of(&plan, ArticleKind::Guardian), None);
    }

    #[test]
    fn test_optional_articles_shift_numbering() {
        let cases = [
            (false, false, "III", "IV"),
            (true, false, "IV", "V"),
            (false, true, "IV", "V"),
            (true, true, "V", "VI"),
        ];
        for (guardian, gifts, residuary, general) in cases {
            let plan = ArticlePlan::with_options(guardian, gifts);
            assert_eq!(
                numeral_of(&plan, ArticleKind::Residuary).as_deref(),
                Some(residuary)
            );
            assert_eq!(
                numeral_of(&plan, ArticleKind::GeneralProvisions).as_deref(),
                Some(general)
            );
        }
    }

    #[test]
    fn test_full_plan_order() {
        let plan = ArticlePlan::with_options(true, true);
        let listed: Vec<(String, ArticleKind)> = plan.iter().collect();
        assert_eq!(
            listed,
            vec![
                ("I".to_string(), ArticleKind::Declaration),
                ("II".to_string(), ArticleKind::Executor),
                ("III".to_string(), ArticleKind::Guardian),
                ("IV".to_string(), ArticleKind::SpecificGifts),
                ("V".to_string(), ArticleKind::Residuary),
                ("VI".to_string(), ArticleKind::GeneralProvisions),
            ]
        );
    }

    #[test]
    fn test_plan_from_will() {
        let will = WillInput::new("Jane", "John").with_guardian(" ").with_gift("A", "B");
        let plan = ArticlePlan::for_will(&will);
        assert_eq!(numeral_of(&plan, ArticleKind::Guardian), None);
        assert_eq!(numeral_of(&plan, ArticleKind::SpecificGifts).as_deref(), Some("III"));

        let will = WillInput::new("Jane", "John").with_alternate_guardian("Hal");
        assert_eq!(ArticlePlan::for_will(&will), ArticlePlan::with_options(false, false));
    }
}
