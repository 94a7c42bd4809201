// SPDX-License-Identifier: MPL-2.0
//! Fixed enumerations for browsing and filtering: categories, feed
//! languages, and search sort modes.

/// Podcast category tabs.
///
/// `All` is a synthetic sentinel not present in the underlying taxonomy;
/// it means "unfiltered default set" and maps to `None` at the data-source
/// boundary (see [`Category::as_filter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    All,
    Arts,
    Business,
    Comedy,
    Education,
    Health,
    News,
    Science,
    Sports,
    Technology,
    TrueCrime,
}

impl Category {
    /// Every tab in display order, `All` first.
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::Arts,
        Category::Business,
        Category::Comedy,
        Category::Education,
        Category::Health,
        Category::News,
        Category::Science,
        Category::Sports,
        Category::Technology,
        Category::TrueCrime,
    ];

    /// Stable identifier used in config files and the embedded catalog.
    pub fn slug(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Arts => "arts",
            Category::Business => "business",
            Category::Comedy => "comedy",
            Category::Education => "education",
            Category::Health => "health",
            Category::News => "news",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::TrueCrime => "true-crime",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// i18n key for the tab label.
    pub fn i18n_key(self) -> String {
        format!("category-{}", self.slug())
    }

    /// Maps the sentinel to "no filter" for the category data source.
    pub fn as_filter(self) -> Option<Category> {
        match self {
            Category::All => None,
            other => Some(other),
        }
    }
}

/// Feed languages selectable in the filter modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Portuguese,
        Language::Japanese,
    ];

    /// ISO 639-1 code, also the catalog representation.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Portuguese => "pt",
            Language::Japanese => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// i18n key for the checkbox label.
    pub fn i18n_key(self) -> String {
        format!("language-{}", self.code())
    }
}

/// Ranking applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Closest textual match first (default).
    #[default]
    Exactness,
    /// Most popular first.
    Popularity,
}

impl SortBy {
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortBy::Exactness => "sort-exactness",
            SortBy::Popularity => "sort-popularity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sentinel_maps_to_no_filter() {
        assert_eq!(Category::All.as_filter(), None);
        assert_eq!(Category::News.as_filter(), Some(Category::News));
    }

    #[test]
    fn slugs_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("cooking"), None);
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("xx"), None);
    }

    #[test]
    fn all_tab_is_listed_first() {
        assert_eq!(Category::ALL[0], Category::All);
    }

    #[test]
    fn default_sort_is_exactness() {
        assert_eq!(SortBy::default(), SortBy::Exactness);
    }
}
