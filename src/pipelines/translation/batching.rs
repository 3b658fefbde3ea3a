/// Number of batches needed to cover `len` sentences, `ceil(len / batch_size)`.
/// Returns 0 for an empty input or a zero batch size.
pub fn batch_count(len: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        0
    } else {
        (len + batch_size - 1) / batch_size
    }
}

/// Splits the sentences into contiguous batches of at most `batch_size` elements, preserving order.
/// Never yields an empty batch.
///
/// # Example
///
/// ```
/// use opus_batch_translate::pipelines::translation::batches;
///
/// let sentences: Vec<String> = (0..25).map(|i| i.to_string()).collect();
/// let sizes: Vec<usize> = batches(&sentences, 10).map(|batch| batch.len()).collect();
/// assert_eq!(sizes, vec![10, 10, 5]);
/// ```
pub fn batches<T>(items: &[T], batch_size: usize) -> std::slice::Chunks<'_, T> {
    // `chunks` panics on 0, callers validate the batch size beforehand
    items.chunks(batch_size.max(1))
}
