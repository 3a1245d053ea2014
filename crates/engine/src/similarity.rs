use ndarray::ArrayView1;

/// Cosine similarity between two vectors
///
/// Returns 0.0 when either vector has zero norm so that an all-zero
/// embedding never wins a ranking by dividing by zero.
pub fn cosine_similarity(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f32 {
    let dot = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
