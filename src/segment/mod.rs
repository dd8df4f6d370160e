//! Message segmentation.
//!
//! Encoded messages can be longer than the frame buffer, so they are sliced
//! into buffer-sized segments before packing. Segments are independent
//! copies of the input in original order; concatenating them reproduces the
//! input exactly.

use bytes::Bytes;

/// Splits `data` into `len / chunk_size + 1` segments.
///
/// Every segment except the last holds exactly `chunk_size` bytes; the last
/// holds the remainder. The count formula always yields one trailing
/// remainder segment, so an input whose length is an exact multiple of
/// `chunk_size` (the empty input included) ends with an empty segment.
/// Downstream appends treat an empty segment as a no-op.
///
/// # Panics
///
/// Panics if `chunk_size` is zero. [`PackConfig`](crate::PackConfig)
/// validation guarantees a non-zero size for every caller inside the crate.
///
/// # Example
///
/// ```
/// use packrs::segment_bytes;
///
/// let segments = segment_bytes(&[1, 2, 3, 4, 5], 2);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(&segments[0][..], &[1, 2]);
/// assert_eq!(&segments[2][..], &[5]);
/// ```
pub fn segment_bytes(data: &[u8], chunk_size: usize) -> Vec<Bytes> {
    let count = data.len() / chunk_size + 1;
    let mut segments = Vec::with_capacity(count);

    for i in 0..count {
        let start = i * chunk_size;
        let end = usize::min(start + chunk_size, data.len());
        segments.push(Bytes::copy_from_slice(&data[start..end]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_yields_trailing_empty_segment() {
        let segments = segment_bytes(&[0xAA; 8], 4);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].len(), 4);
        assert_eq!(segments[1].len(), 4);
        assert!(segments[2].is_empty());
    }

    #[test]
    fn test_remainder_lands_in_final_segment() {
        let segments = segment_bytes(&[0xBB; 10], 4);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2].len(), 2);
    }

    #[test]
    fn test_empty_input_yields_one_empty_segment() {
        let segments = segment_bytes(&[], 128);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_empty());
    }

    #[test]
    fn test_input_smaller_than_chunk_size() {
        let segments = segment_bytes(&[1, 2, 3], 128);
        assert_eq!(segments.len(), 1);
        assert_eq!(&segments[0][..], &[1, 2, 3]);
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let data: Vec<u8> = (0..=255).collect();
        for chunk_size in [1, 3, 7, 64, 128, 256, 1000] {
            let joined: Vec<u8> = segment_bytes(&data, chunk_size)
                .iter()
                .flat_map(|s| s.iter().copied())
                .collect();
            assert_eq!(joined, data, "chunk_size {}", chunk_size);
        }
    }

    #[test]
    fn test_segments_are_independent_copies() {
        let mut data = vec![1u8, 2, 3, 4];
        let segments = segment_bytes(&data, 2);
        data[0] = 99;
        assert_eq!(&segments[0][..], &[1, 2]);
    }

    #[test]
    fn test_segment_count_formula() {
        assert_eq!(segment_bytes(&[0; 100], 128).len(), 1);
        assert_eq!(segment_bytes(&[0; 128], 128).len(), 2);
        assert_eq!(segment_bytes(&[0; 200], 128).len(), 2);
        assert_eq!(segment_bytes(&[0; 256], 128).len(), 3);
    }
}
