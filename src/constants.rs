/// Constants used by category-string decoding.
pub mod categories {
    /// Delimiter between `name-value` pairs in the encoded string.
    pub const PAIR_DELIMITER: char = ';';
    /// Number of trailing characters (`-<digit>`) stripped to obtain a name.
    pub const VALUE_SUFFIX_LEN: usize = 2;
}

/// Constants used by text normalization and feature extraction.
pub mod text {
    /// Sentinel token substituted for every detected URL before tokenization.
    pub const URL_SENTINEL: &str = "urlplaceholder";
    /// URL pattern: scheme plus the URL character set, including
    /// percent-encoded bytes. The `$-_` range covers digits, uppercase
    /// letters, and most URL punctuation.
    pub const URL_PATTERN: &str =
        r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";
    /// Literal token treated as a starting-verb signal (retweet marker).
    pub const RETWEET_MARKER: &str = "RT";
}

/// Embedded word lists consumed by `LinguisticResources`.
pub mod wordlists {
    /// English stopword list, one lowercase word per line.
    pub const STOPWORDS_EN: &str = include_str!("text/data/stopwords_en.txt");
    /// English base-form verb lexicon, one lowercase word per line.
    pub const VERBS_EN: &str = include_str!("text/data/verbs_en.txt");
    /// Irregular noun plurals, `plural<TAB>singular` per line.
    pub const NOUN_EXCEPTIONS_EN: &str = include_str!("text/data/noun_exceptions_en.txt");
}
