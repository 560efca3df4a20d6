/// A `scraper::Selector` parsed once and kept for the rest of the run.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| {
            Selector::parse($e).unwrap_or_else(|e| panic!("Invalid selector {:?}: {e}", $e))
        });
        &*SELECTOR
    }};
}

/// A `regex::Regex` compiled once and kept for the rest of the run.
#[macro_export]
macro_rules! regex {
    ($e: expr) => {{
        use ::once_cell::sync::Lazy;
        use ::regex::Regex;
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new($e).unwrap_or_else(|e| panic!("Invalid pattern {:?}: {e}", $e)));
        &*PATTERN
    }};
}
