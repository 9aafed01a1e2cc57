/// Optional hook that maps a normalized key to a corrected key.
///
/// Must be pure: the scanner may call it any number of times and never
/// expects it to fail.
pub trait SpellCorrector: Send + Sync {
    fn correct(&self, key: &str) -> String;
}

impl<F> SpellCorrector for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn correct(&self, key: &str) -> String {
        self(key)
    }
}
