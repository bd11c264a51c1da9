/// Read-through caching that degrades to the backing computation.
///
/// Returns the cached value on a hit. On a miss, or when the cache itself cannot be
/// read, evaluates `$block`, queues the result for a background cache write and
/// returns it. Errors from `$block` propagate with `?`.
///
/// # Arguments
/// * `$cache`: a value with `get_from_cache` and `set_in_background` methods.
/// * `$key`: the `CacheKey` to read and write.
/// * `$ttl`: time-to-live for the written value, in seconds.
/// * `$block`: a future producing `AppResult<T>`.
///
/// # Example
/// ```rust,ignore
/// let places: Vec<Place> = cached!(cache, CacheKey::PlaceCatalog, 300, store.list_places())?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        match $cache.get_from_cache(&$key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %$key, "Cache hit");
                Ok(cached)
            }
            lookup => {
                match lookup {
                    Err(e) => tracing::warn!(key = %$key, error = %e, "Cache read failed, using backing store"),
                    _ => tracing::debug!(key = %$key, "Cache miss"),
                }
                let value = $block.await?;
                $cache.set_in_background(&$key, &value, $ttl);
                Ok(value)
            }
        }
    }};
}
