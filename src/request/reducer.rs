use indexmap::IndexMap;

/// Fold `(name, value)` pairs into a map; a later pair overwrites an earlier
/// one with the same name but keeps the position of the first.
pub fn reduce_pairs<I, K, V>(pairs: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .fold(IndexMap::new(), |mut acc, (name, value)| {
            acc.insert(name.into(), value.into());
            acc
        })
}
